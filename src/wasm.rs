use std::str::FromStr;

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::color::blend_css;
use crate::grid::{Grid, GridInvalidReason};
use crate::highlight::{compute_highlights, Category, HighlightRequest};
use crate::instance::WordInstance;
use crate::locate::locate;
use crate::position::Position;
use crate::sequential::match_sequential;

fn grid_from_js(rows: Vec<String>) -> Result<Grid, JsValue> {
    Grid::from_rows(rows).map_err(|reasons| {
        let message = match reasons.first() {
            Some(GridInvalidReason::RaggedRow { row, expected, found }) => {
                format!("row {} has {} letters, expected {}", row, found, expected)
            }
            _ => "grid is empty".to_string(),
        };
        JsValue::from_str(&message)
    })
}

fn position_to_js(position: &Position) -> Array {
    Array::of2(&JsValue::from(position.row() as u32), &JsValue::from(position.col() as u32))
}

fn positions_to_js(positions: &[Position]) -> Array {
    positions.iter().map(position_to_js).collect()
}

fn instance_to_js(instance: &WordInstance) -> Result<JsValue, JsValue> {
    let object = Object::new();
    Reflect::set(&object, &"word".into(), &instance.word.as_str().into())?;
    Reflect::set(&object, &"positions".into(), &positions_to_js(&instance.positions))?;
    Reflect::set(&object, &"isBackwards".into(), &instance.is_backwards.into())?;
    Reflect::set(&object, &"colorId".into(), &(instance.color_id as u32).into())?;
    Reflect::set(&object, &"isSecretMessage".into(), &instance.is_secret_message.into())?;
    Ok(object.into())
}

/// Every placement of `word` in the grid given by `rows`, as arrays of `[row, col]` pairs.
#[wasm_bindgen(js_name = locateWord)]
pub fn locate_word(word: &str, backwards: bool, rows: Vec<String>) -> Result<Array, JsValue> {
    let grid = grid_from_js(rows)?;
    Ok(locate(word, backwards, &grid).iter().map(|placement| positions_to_js(placement)).collect())
}

/// Sequentially match secret message `fragments` against the grid given by `rows`.
#[wasm_bindgen(js_name = matchSequential)]
pub fn match_sequential_js(fragments: Vec<String>, rows: Vec<String>) -> Result<Array, JsValue> {
    let grid = grid_from_js(rows)?;
    match_sequential(&fragments, &grid).iter().map(instance_to_js).collect()
}

/// Highlights of the shipped puzzle with the named categories (e.g. `"forwards-extra"`) enabled.
#[wasm_bindgen(js_name = shippedHighlights)]
pub fn shipped_highlights(categories: Vec<String>) -> Result<Array, JsValue> {
    let mut request = HighlightRequest::shipped();
    for name in categories {
        let category = Category::from_str(&name)
            .map_err(|_| JsValue::from_str(&format!("unknown category {}", name)))?;
        request.set_enabled(category, true);
    }

    compute_highlights(&request).instances().iter().map(instance_to_js).collect()
}

/// Blend CSS `rgba(...)` colours.
#[wasm_bindgen(js_name = blendColors)]
pub fn blend_colors(colors: Vec<String>) -> String {
    blend_css(&colors)
}
