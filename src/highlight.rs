use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, HashSet};

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use strum::{Display, EnumString, VariantArray};
use tracing::{debug, debug_span};
use unordered_pair::UnorderedPair;

use crate::cryptogram::Cryptogram;
use crate::grid::Grid;
use crate::instance::WordInstance;
use crate::locate::locate;
use crate::position::Position;
use crate::puzzle;
use crate::sequential::match_sequential;

/// The word lists a request can highlight, in the order they are processed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, VariantArray, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    /// Words read left to right, top to bottom, or along a rightward diagonal.
    Forwards,
    /// Further forward words.
    ForwardsExtra,
    /// Words read right to left, bottom to top, or along a leftward diagonal.
    Backwards,
    /// Further backward words.
    BackwardsExtra,
    /// Anagrammed fragments of the secret message, matched in reading order.
    SecretMessage,
    /// Secret message words, matched in reading order against the unscrambled grid.
    UnscrambledSecretMessage,
}

impl Category {
    /// Whether words of this category are searched for backwards.
    pub fn is_backwards(&self) -> bool {
        matches!(self, Self::Backwards | Self::BackwardsExtra)
    }

    /// Whether this category is matched sequentially rather than located.
    pub fn is_secret_message(&self) -> bool {
        matches!(self, Self::SecretMessage | Self::UnscrambledSecretMessage)
    }
}

/// Everything a highlight computation depends on.
///
/// Requests are plain values: build one, toggle categories on it, and pass it to [`compute_highlights`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HighlightRequest {
    /// The grid as shipped.
    pub grid: Grid,
    /// The unscrambled grid the unscrambled secret message is matched against.
    /// Without one, [`grid`](Self::grid) is used.
    pub unscrambled_grid: Option<Grid>,
    /// Word or fragment lists per category, in order.
    pub words: HashMap<Category, Vec<String>>,
    /// Categories to highlight.
    pub enabled: HashSet<Category>,
    /// When set, grids are substituted through this view before searching.
    pub cryptogram: Option<Cryptogram>,
}

impl HighlightRequest {
    /// A request over `grid` with no words and nothing enabled.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            unscrambled_grid: None,
            words: HashMap::new(),
            enabled: HashSet::new(),
            cryptogram: None,
        }
    }

    /// The shipped puzzle with every word list loaded and nothing enabled.
    pub fn shipped() -> Self {
        let mut request = Self::new(puzzle::grid()).with_unscrambled_grid(puzzle::unscrambled_grid());
        for category in Category::VARIANTS {
            request = request.with_words(*category, puzzle::words(*category).iter().copied());
        }
        request
    }

    /// Replace the word list of `category`. Words are stored lowercased.
    pub fn with_words<I, S>(mut self, category: Category, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.insert(category, words.into_iter().map(|w| w.as_ref().to_lowercase()).collect());
        self
    }

    /// Enable highlighting of `category`.
    pub fn enable(mut self, category: Category) -> Self {
        self.enabled.insert(category);
        self
    }

    /// Enable or disable highlighting of `category` in place.
    pub fn set_enabled(&mut self, category: Category, enabled: bool) -> &mut Self {
        if enabled {
            self.enabled.insert(category);
        } else {
            self.enabled.remove(&category);
        }
        self
    }

    /// Search through a cryptogram view of the grids.
    pub fn with_cryptogram(mut self, cryptogram: Cryptogram) -> Self {
        self.cryptogram = Some(cryptogram);
        self
    }

    /// Match the unscrambled secret message against `grid`.
    pub fn with_unscrambled_grid(mut self, grid: Grid) -> Self {
        self.unscrambled_grid = Some(grid);
        self
    }

    fn words(&self, category: Category) -> &[String] {
        self.words.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    fn substituted<'a>(&self, grid: &'a Grid) -> Cow<'a, Grid> {
        match &self.cryptogram {
            Some(cryptogram) => Cow::Owned(cryptogram.apply(grid)),
            None => Cow::Borrowed(grid),
        }
    }

    /// The grid words are located in, after any cryptogram substitution.
    pub fn search_grid(&self) -> Cow<'_, Grid> {
        self.substituted(&self.grid)
    }

    fn grid_for(&self, category: Category) -> Cow<'_, Grid> {
        match (category, &self.unscrambled_grid) {
            (Category::UnscrambledSecretMessage, Some(unscrambled)) => self.substituted(unscrambled),
            _ => self.search_grid(),
        }
    }
}

/// The outcome of [`compute_highlights`]: every placement found, and which cells each covers.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Highlights {
    instances: Vec<WordInstance>,
    cells: BTreeMap<Position, Vec<usize>>,
    conflicts: HashSet<UnorderedPair<usize>>,
}

impl Highlights {
    /// Every placement in creation order.
    pub fn instances(&self) -> &[WordInstance] {
        &self.instances
    }

    /// Placements covering `position`, in creation order.
    pub fn at(&self, position: Position) -> impl Iterator<Item = &WordInstance> + '_ {
        self.cells.get(&position)
            .into_iter()
            .flatten()
            .filter_map(|index| self.instances.get(*index))
    }

    /// Whether any placement covers `position`.
    pub fn is_highlighted(&self, position: Position) -> bool {
        self.cells.contains_key(&position)
    }

    /// Covered cells in row-major order, each with the indices of the placements covering it.
    pub fn cells(&self) -> impl Iterator<Item = (&Position, &[usize])> + '_ {
        self.cells.iter().map(|(position, indices)| (position, indices.as_slice()))
    }

    /// Pairs of placement indices that overlap or touch within a direction class.
    pub fn conflicts(&self) -> &HashSet<UnorderedPair<usize>> {
        &self.conflicts
    }

    /// Whether nothing was found.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

fn collect_instances(request: &HighlightRequest) -> Vec<WordInstance> {
    let mut instances = Vec::new();
    let mut forwards_color = 0;
    let mut backwards_color = 0;

    for category in Category::VARIANTS.iter().filter(|c| request.enabled.contains(*c)) {
        let grid = request.grid_for(*category);

        if category.is_secret_message() {
            for mut instance in match_sequential(request.words(*category), &grid) {
                instance.color_id = forwards_color;
                forwards_color += 1;
                instances.push(instance);
            }
            continue;
        }

        let backwards = category.is_backwards();
        let counter = if backwards { &mut backwards_color } else { &mut forwards_color };
        for word in request.words(*category) {
            for positions in locate(word, backwards, &grid) {
                instances.push(WordInstance::new(word, positions, backwards, *counter));
                *counter += 1;
            }
        }
    }

    instances
}

/// Connect every pair of same-class placements that overlap or share an edge.
fn relationship_graph(instances: &[WordInstance]) -> UnGraphMap<usize, ()> {
    let mut graph = UnGraphMap::with_capacity(instances.len(), instances.len());
    for index in 0..instances.len() {
        graph.add_node(index);
    }

    for ((i, a), (j, b)) in instances.iter().enumerate().tuple_combinations() {
        if a.conflicts_with(b) {
            graph.add_edge(i, j, ());
        }
    }

    graph
}

/// Greedily give each placement, in creation order, the smallest colour none of its coloured neighbours has.
fn assign_colors(graph: &UnGraphMap<usize, ()>, instances: &mut [WordInstance]) {
    let mut assigned: HashMap<usize, usize> = HashMap::with_capacity(instances.len());

    for (index, instance) in instances.iter_mut().enumerate() {
        let taken: HashSet<usize> = graph.neighbors(index)
            .filter_map(|neighbor| assigned.get(&neighbor).copied())
            .collect();
        // there are fewer neighbours than candidate colours, so one is always free
        let color = (0..=taken.len()).find(|c| !taken.contains(c)).unwrap_or(taken.len());

        assigned.insert(index, color);
        instance.color_id = color;
    }
}

/// Locate and match every enabled category, colour the placements, and map each covered cell to its placements.
///
/// Categories are processed in [`Category`] order. Within a direction class, placements that overlap or share an
/// edge always receive different colour ids; unrelated placements may share one, so a small palette indexed modulo
/// its length stays distinguishable.
pub fn compute_highlights(request: &HighlightRequest) -> Highlights {
    let _span = debug_span!("compute_highlights", enabled = request.enabled.len()).entered();

    let mut instances = collect_instances(request);
    let graph = relationship_graph(&instances);
    assign_colors(&graph, &mut instances);

    let mut cells: BTreeMap<Position, Vec<usize>> = BTreeMap::new();
    for (index, instance) in instances.iter().enumerate() {
        for position in &instance.positions {
            cells.entry(*position).or_default().push(index);
        }
    }

    let conflicts: HashSet<UnorderedPair<usize>> = graph.all_edges()
        .map(|(a, b, _)| UnorderedPair::from((a, b)))
        .collect();

    debug!(
        instances = instances.len(),
        conflicts = conflicts.len(),
        cells = cells.len(),
        "computed highlights"
    );

    Highlights { instances, cells, conflicts }
}
