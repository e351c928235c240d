pub mod targets {
    pub const LEXER: &str = "lexer";
    pub const PARSER: &str = "parser";
    pub const CNF: &str = "cnf";
    pub const SUBSUMPTION: &str = "subsumption";
    pub const CONSTRAINT: &str = "constraint";
}

#[cfg(test)]
mod tests {
    use log::{LevelFilter, STATIC_MAX_LEVEL};

    #[test]
    fn test_trace_is_compiled_in() {
        // Holds for release builds too, so `RUST_LOG` works after `cargo install`
        assert_eq!(STATIC_MAX_LEVEL, LevelFilter::Trace);
    }
}
