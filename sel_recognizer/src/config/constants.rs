pub mod compile_time {
    pub mod lexical {
        /// Maximum input length accepted for a single recognition pass (1MB)
        /// SECURITY: Bounds memory used by the token sequence
        pub const MAX_INPUT_LENGTH: usize = 1_048_576;

        /// Integer lexemes longer than this are counted as oversized in metrics
        pub const LONG_INTEGER_THRESHOLD: usize = 64;
    }

    pub mod syntax {
        /// Maximum parenthesis nesting depth
        /// SECURITY: Prevents stack exhaustion in the recursive-descent recognizer.
        /// Each level costs three production frames.
        pub const MAX_PARSE_DEPTH: usize = 4_096;

        /// Default nesting limit when no preference is supplied
        pub const DEFAULT_PARSE_DEPTH: usize = 1_024;
    }

    pub mod logging {
        /// Log buffer size for in-memory loggers
        /// RESOURCE: Controls memory usage for logging
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum log message length
        /// RESOURCE: Prevents memory attacks via huge messages
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }

    pub mod batch {
        /// Maximum number of lines checked from a single input file
        pub const MAX_BATCH_LINES: usize = 100_000;
    }
}
