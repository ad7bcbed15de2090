//! JavaScript bindings.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::board::Board;

/// Solve a board written in the text format, returning the solved rows or an empty array if there is no solution.
#[wasm_bindgen(js_name = solveText)]
pub fn solve_text(input: &str) -> Result<Array, JsError> {
    let board: Board = input.parse()?;

    let rows = Array::new();
    if let Some(solved) = board.solve() {
        for line in solved.to_string().lines() {
            rows.push(&JsValue::from_str(line));
        }
    }

    Ok(rows)
}
