//! Lua table literal writer
//!
//! Every artifact is a single global assignment `Name = { ... };` that the
//! addon loads verbatim. Key quoting, field order and number formatting are
//! part of that contract.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::info;

/// Escape double quotes for embedding in a Lua string literal
pub fn sanitize(text: &str) -> String {
    text.replace('"', "\\\"")
}

/// Percentage with one decimal, as the addon displays it
pub fn percent(value: f64) -> String {
    format!("{:.1}", value)
}

/// A value inside a Lua record
#[derive(Debug, Clone, PartialEq)]
pub enum LuaValue<'a> {
    Str(&'a str),
    Int(i64),
    Percent(f64),
    Bool(bool),
}

impl LuaValue<'_> {
    fn render(&self) -> String {
        match self {
            LuaValue::Str(s) => format!("\"{}\"", sanitize(s)),
            LuaValue::Int(v) => v.to_string(),
            LuaValue::Percent(v) => percent(*v),
            LuaValue::Bool(v) => v.to_string(),
        }
    }
}

/// A row that is written as a `{ ["field"] = value, ... }` record
pub trait LuaRecord {
    /// Fields in output order
    fn fields(&self) -> Vec<(&'static str, LuaValue<'_>)>;
}

/// Incrementally built Lua table assignment
#[derive(Debug)]
pub struct LuaTable {
    out: String,
}

impl LuaTable {
    /// Start `name = {`
    pub fn open(name: &str) -> Self {
        Self {
            out: format!("{} = {{\n", name),
        }
    }

    /// `["key"] = value,` with a bare value
    pub fn scalar(&mut self, key: &str, value: impl std::fmt::Display) {
        let _ = writeln!(self.out, "[\"{}\"] = {},", key, value);
    }

    /// `["key"] = {percent, rank, "note"},`
    pub fn usage(&mut self, key: &str, pct: f64, rank: usize, note: &str) {
        let _ = writeln!(
            self.out,
            "[\"{}\"] = {{{}, {}, \"{}\"}},",
            key,
            percent(pct),
            rank,
            sanitize(note)
        );
    }

    /// A record entry of a row sequence
    pub fn record<R: LuaRecord + ?Sized>(&mut self, row: &R) {
        self.out.push_str("  {\n");
        for (field, value) in row.fields() {
            let _ = writeln!(self.out, "    [\"{}\"] = {},", field, value.render());
        }
        self.out.push_str("  },\n");
    }

    /// A bare string element of a list
    pub fn element(&mut self, value: &str) {
        let _ = writeln!(self.out, "  \"{}\",", sanitize(value));
    }

    /// Close with `};` followed by `trailer`
    pub fn close(mut self, trailer: &str) -> String {
        self.out.push_str("};");
        self.out.push_str(trailer);
        self.out
    }
}

/// Write a generated artifact into the output folder
pub fn write_artifact(dir: &Path, file_name: &str, contents: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(file_name);
    std::fs::write(&path, contents)?;
    info!(path = %path.display(), bytes = contents.len(), "Wrote artifact");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: String,
        rank: usize,
    }

    impl LuaRecord for Row {
        fn fields(&self) -> Vec<(&'static str, LuaValue<'_>)> {
            vec![
                ("name", LuaValue::Str(&self.name)),
                ("rank", LuaValue::Int(self.rank as i64)),
                ("percent", LuaValue::Percent(12.34)),
                ("isBis", LuaValue::Bool(self.rank == 1)),
            ]
        }
    }

    #[test]
    fn test_sanitize_escapes_quotes() {
        assert_eq!(sanitize(r#"He said "hi""#), r#"He said \"hi\""#);
        assert_eq!(sanitize("plain"), "plain");
    }

    #[test]
    fn test_percent_one_decimal() {
        assert_eq!(percent(55.0), "55.0");
        assert_eq!(percent(12.34), "12.3");
        assert_eq!(percent(99.96), "100.0");
        assert_eq!(percent(0.0), "0.0");
    }

    #[test]
    fn test_usage_line() {
        let mut table = LuaTable::open("usageDb2v2");
        table.usage("262123", 30.0, 2, r#"The "Best" Helm () (55.0% - #2)"#);
        let text = table.close("");
        assert_eq!(
            text,
            "usageDb2v2 = {\n[\"262123\"] = {30.0, 2, \"The \\\"Best\\\" Helm () (55.0% - #2)\"},\n};"
        );
    }

    #[test]
    fn test_scalar_line() {
        let mut table = LuaTable::open("usageDbPvE");
        table.scalar("262_profileCount", 1500);
        assert_eq!(table.close(""), "usageDbPvE = {\n[\"262_profileCount\"] = 1500,\n};");
    }

    #[test]
    fn test_record_layout() {
        let mut table = LuaTable::open("GSTSlotGearDb");
        table.record(&Row {
            name: "Ring \"of\" Power".to_string(),
            rank: 1,
        });
        let text = table.close("\n");
        assert_eq!(
            text,
            concat!(
                "GSTSlotGearDb = {\n",
                "  {\n",
                "    [\"name\"] = \"Ring \\\"of\\\" Power\",\n",
                "    [\"rank\"] = 1,\n",
                "    [\"percent\"] = 12.3,\n",
                "    [\"isBis\"] = true,\n",
                "  },\n",
                "};\n"
            )
        );
    }

    #[test]
    fn test_element_list() {
        let mut table = LuaTable::open("GSTBracketNames");
        table.element("pve");
        table.element("2v2");
        assert_eq!(table.close("\n"), "GSTBracketNames = {\n  \"pve\",\n  \"2v2\",\n};\n");
    }
}
