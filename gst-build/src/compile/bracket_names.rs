//! Bracket name list

use gst_common::Bracket;

use crate::lua::LuaTable;

/// Render the `GSTBracketNames` list in build order
pub fn render_bracket_names(brackets: &[Bracket]) -> String {
    let mut table = LuaTable::open("GSTBracketNames");
    for bracket in brackets {
        table.element(&bracket.table_name());
    }
    table.close("\n")
}
