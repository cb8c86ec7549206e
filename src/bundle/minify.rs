//! Script minification via oxc.
//!
//! The default pass only reprints the parsed program without comments or
//! insignificant whitespace, so literal contents and statement boundaries are
//! whatever the parser saw. Compression and mangling are opt-in.

use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

/// Minification switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinifyOptions {
    /// Reprint without whitespace and comments. `false` passes content through.
    pub enabled: bool,
    /// Run oxc's compressor (dead code removal, constant folding).
    pub compress: bool,
    /// Rename local bindings. Top-level names stay intact.
    pub mangle: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            compress: false,
            mangle: false,
        }
    }
}

/// Minify a classic (non-module) script.
///
/// Returns the first parse diagnostic as the error message.
pub fn minify_js(source: &str, options: MinifyOptions) -> Result<String, String> {
    if !options.enabled {
        return Ok(source.to_string());
    }

    let allocator = Allocator::default();
    // Bundled files share one global scope, so parse them as scripts.
    let source_type = SourceType::cjs().with_script(true);
    let ret = Parser::new(&allocator, source, source_type).parse();
    if let Some(error) = ret.errors.first() {
        return Err(error.to_string());
    }

    let mut program = ret.program;
    let scoping = if options.compress || options.mangle {
        let minifier_options = MinifierOptions {
            mangle: options.mangle.then(MangleOptions::default),
            compress: options.compress.then(CompressOptions::smallest),
        };
        Minifier::new(minifier_options)
            .minify(&allocator, &mut program)
            .scoping
    } else {
        None
    };

    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(scoping)
        .build(&program)
        .code;
    Ok(code)
}
