//! Limits fixed at build time

pub mod compile_time {
    pub mod lexical {
        /// Bounds per-token memory for hostile input
        pub const MAX_IDENTIFIER_LENGTH: usize = 255;

        /// Bytes, including the delimiters
        pub const MAX_COMMENT_LENGTH: usize = 100_000;

        /// Bytes, including the quotes
        pub const MAX_STRING_SIZE: usize = 1_048_576;

        /// Tokens produced for a single source, trivia included
        pub const MAX_TOKEN_COUNT: usize = 1_000_000;
    }

    pub mod analysis {
        /// Tokens shown on each side of a declaration keyword in diagnostics
        pub const DIAGNOSTIC_CONTEXT_RADIUS: usize = 4;
    }

    pub mod logging {
        /// Events retained by a memory logger
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Characters kept from each event message
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }
}
