use clap::{ArgGroup, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wordsearch::render::{render_text, Palette};
use wordsearch::{
    compute_highlights, puzzle, Category, Cryptogram, CryptogramMode, HighlightRequest, Highlights, Key,
};

/// Print the shipped word search with word lists highlighted.
#[derive(Parser)]
#[command(group(ArgGroup::new("cipher").args(["encode", "decode"])))]
struct Opts {
    /// Word list to highlight, e.g. `forwards` or `secret-message`. Repeatable.
    #[arg(long = "enable", value_name = "CATEGORY")]
    categories: Vec<Category>,

    /// Show and search the grid as encoded by the cryptogram key
    #[arg(long)]
    encode: bool,

    /// Show and search the grid as decoded by the cryptogram key
    #[arg(long)]
    decode: bool,

    /// Cryptogram key to use instead of the puzzle's own
    #[arg(long, requires = "cipher")]
    key: Option<Key>,

    /// Search the grid as printed in the puzzle while still showing the cryptogram letters
    #[arg(long, requires = "cipher")]
    highlight_original: bool,

    /// Show the unscrambled grid instead of the scrambled one
    #[arg(long)]
    unscrambled: bool,

    /// List every placement with its colour
    #[arg(long)]
    list: bool,
}

impl Opts {
    fn cryptogram(&self) -> Option<Cryptogram> {
        let mode = match (self.encode, self.decode) {
            (true, _) => CryptogramMode::Encode,
            (_, true) => CryptogramMode::Decode,
            _ => return None,
        };
        let key = self.key.clone().unwrap_or_else(puzzle::cryptogram_key);
        Some(Cryptogram::new(key, mode))
    }
}

/// Highlight the shipped puzzle as `opts` asks and render it.
fn view(opts: &Opts) -> (String, Highlights) {
    let mut request = HighlightRequest::shipped();
    if opts.unscrambled {
        request.grid = puzzle::unscrambled_grid();
    }
    for category in &opts.categories {
        request.set_enabled(*category, true);
    }

    let cryptogram = opts.cryptogram();
    let shown = match &cryptogram {
        Some(cryptogram) => cryptogram.apply(&request.grid),
        None => request.grid.clone(),
    };
    if let Some(cryptogram) = cryptogram {
        info!(
            key = %cryptogram.key,
            mode = ?cryptogram.mode,
            original = opts.highlight_original,
            "applying cryptogram"
        );
        if !opts.highlight_original {
            request = request.with_cryptogram(cryptogram);
        }
    }

    let highlights = compute_highlights(&request);
    info!(instances = highlights.instances().len(), "highlighted");

    (render_text(&shown, &highlights), highlights)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();
    let (text, highlights) = view(&opts);
    print!("{}", text);

    if opts.list {
        let palette = Palette::default();
        println!();
        for instance in highlights.instances() {
            let color = palette.instance_color(instance).map(|c| c.to_string()).unwrap_or_default();
            let cells = instance.positions.iter().map(|p| format!("({},{})", p.row(), p.col())).collect::<Vec<_>>();
            let class = format!("{:?}", instance.direction_class());
            println!("{:<12} {:<9} {:<28} {}", instance.word, class, color, cells.join(" "));
        }
    }
}
