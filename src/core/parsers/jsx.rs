use std::{path::Path, sync::Arc};

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};

/// A parsed compilation unit.
pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    /// The source text as parsed, without a leading byte-order mark;
    /// rewrite ranges index into it.
    pub code: String,
}

/// Pick the syntax for a file from its extension.
///
/// `.ts` is parsed without JSX so that `<T>value` assertions keep working;
/// plain JavaScript files get JSX enabled.
pub fn syntax_for_path(file_path: &str) -> Syntax {
    match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some("ts") | Some("mts") | Some("cts") => Syntax::Typescript(TsSyntax {
            tsx: false,
            ..Default::default()
        }),
        Some("js") | Some("jsx") | Some("mjs") | Some("cjs") => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
        _ => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
    }
}

/// Parse JSX/TSX source code string into an AST.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing.
pub fn parse_jsx_source(
    code: String,
    file_path: &str,
    source_map: Arc<SourceMap>,
) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    // swc drops a BOM before assigning positions.
    let code = match code.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => code,
    };

    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code.clone());

        let mut parser = Parser::new(
            syntax_for_path(file_path),
            StringInput::from(&*source_file),
            None,
        );

        let module = parser.parse_module().map_err(|e| {
            let loc = source_map.lookup_char_pos(e.span().lo);
            anyhow!(
                "{}:{}: {}",
                loc.line,
                loc.col_display + 1,
                e.into_kind().msg()
            )
        })?;

        Ok(ParsedSource {
            module,
            source_map,
            code,
        })
    })
}
