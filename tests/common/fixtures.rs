//! Test fixtures - stand-in compiler scripts and asset content.
//!
//! The compiler scripts mimic `wasm-pack build`: they run in the project
//! root, record their arguments and populate `pkg/`.

/// Records arguments (one per line) to `compiler-args.txt`, writes `pkg/a.wasm` and `pkg/a.js`.
pub const COMPILER_OK: &str = r#"#!/bin/sh
printf '%s\n' "$@" > compiler-args.txt
mkdir -p pkg
printf 'wasm' > pkg/a.wasm
printf 'js' > pkg/a.js
"#;

/// Like `COMPILER_OK`, plus a nested `pkg/snippets/glue.js`.
pub const COMPILER_WITH_SNIPPETS: &str = r#"#!/bin/sh
printf '%s\n' "$@" > compiler-args.txt
mkdir -p pkg/snippets
printf 'wasm' > pkg/a.wasm
printf 'js' > pkg/a.js
printf 'glue' > pkg/snippets/glue.js
"#;

/// Fails the way a broken `cargo build` inside wasm-pack would.
pub const COMPILER_EXIT_7: &str = r#"#!/bin/sh
echo "error: could not compile" >&2
exit 7
"#;

/// Succeeds without producing any output directory.
pub const COMPILER_NO_OUTPUT: &str = r#"#!/bin/sh
exit 0
"#;

/// Serve command that records where and with which port it ran, then exits.
pub const SERVE_RECORDER: &str =
    r#"command = ["sh", "-c", "pwd > served-from.txt; echo \"$1\" > port.txt", "sh"]"#;

pub const INDEX_HTML: &str = "<!doctype html><script type=\"module\" src=\"pkg/a.js\"></script>\n";

pub const STYLES_CSS: &str = "body { margin: 0; }\n";
