//! Reference variant synthesis.
//!
//! Test sources declare their primitive operations (`GET`, `PRINT`,
//! `MALLOC`, `FREE`) as `extern` and leave them undefined; the
//! interpreter supplies them internally. A native reference build needs
//! real definitions, so each test gets a variant with stub bodies
//! prepended and the forward declarations dropped.

use std::fs;
use std::path::Path;

use crate::Result;

/// Stub definitions prepended to every reference variant.
///
/// `PRINT` writes to stderr so the observable trace stays separate from
/// anything else the process emits on stdout.
pub const STUB_PREAMBLE: &str = "\
#include <stdio.h>
#include <stdlib.h>
int GET() {int a;scanf(\"%d\", &a); return a;}
void PRINT(int a) {fprintf(stderr,\"%d\", a);}
void* MALLOC(int a) {return (void*)malloc(a);}
void FREE(void * a) {free(a);}
";

/// Marker for forward declarations of the stubbed primitives.
///
/// Matched against the raw line text at column zero only: indentation
/// exempts a line, and any line beginning with the keyword is dropped
/// whether or not a full word follows.
const EXTERN_MARKER: &str = "extern";

/// Synthesize the reference variant of `source`.
///
/// The stub preamble is followed by every input line except those
/// beginning with [`EXTERN_MARKER`]. Surviving lines keep their exact
/// bytes, line endings included, so the variant stays byte-stable
/// across runs.
#[must_use]
pub fn synthesize(source: &str) -> String {
    let mut variant = String::with_capacity(STUB_PREAMBLE.len() + source.len());
    variant.push_str(STUB_PREAMBLE);
    for line in source.split_inclusive('\n') {
        if line.starts_with(EXTERN_MARKER) {
            continue;
        }
        variant.push_str(line);
    }
    variant
}

/// Read `source`, synthesize its variant, and write it to `target`.
pub fn write_variant(source: &Path, target: &Path) -> Result<()> {
    let text = fs::read_to_string(source)?;
    fs::write(target, synthesize(&text))?;
    Ok(())
}

#[cfg(test)]
mod test_variant {
    use super::*;

    #[test]
    fn preamble_defines_all_primitives() {
        for primitive in ["int GET()", "void PRINT(int a)", "void* MALLOC(int a)", "void FREE(void * a)"] {
            assert!(STUB_PREAMBLE.contains(primitive), "missing stub: {primitive}");
        }
        assert!(STUB_PREAMBLE.starts_with("#include <stdio.h>\n#include <stdlib.h>\n"));
        assert!(STUB_PREAMBLE.ends_with('\n'));
    }

    #[test]
    fn strips_column_zero_extern_lines() {
        let source = "extern int GET();\nextern void PRINT(int);\nint main() { return 0; }\n";
        let variant = synthesize(source);
        assert!(variant.starts_with(STUB_PREAMBLE));
        assert_eq!(&variant[STUB_PREAMBLE.len()..], "int main() { return 0; }\n");
    }

    #[test]
    fn keeps_indented_extern_lines() {
        let source = "  extern int GET();\nint main() { return 0; }\n";
        let variant = synthesize(source);
        assert!(variant.contains("  extern int GET();\n"));
    }

    #[test]
    fn strips_any_line_beginning_with_the_marker() {
        // The match is positional, not lexical: a word merely starting
        // with the keyword is dropped too.
        let variant = synthesize("external_call();\nint x;\n");
        assert!(!variant.contains("external_call"));
        assert!(variant.contains("int x;\n"));
    }

    #[test]
    fn preserves_line_endings_exactly() {
        let source = "extern int GET();\r\nint main() {\r\n   return 0;\r\n}";
        let variant = synthesize(source);
        assert_eq!(&variant[STUB_PREAMBLE.len()..], "int main() {\r\n   return 0;\r\n}");
    }

    #[test]
    fn empty_source_becomes_bare_preamble() {
        assert_eq!(synthesize(""), STUB_PREAMBLE);
    }

    #[test]
    fn write_variant_synthesizes_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("t.c");
        let target = dir.path().join("t.variant.c");
        std::fs::write(&source, "extern void PRINT(int);\nint main() { PRINT(1); return 0; }\n").unwrap();

        write_variant(&source, &target).unwrap();

        let written = std::fs::read_to_string(&target).unwrap();
        assert!(written.starts_with(STUB_PREAMBLE));
        assert!(!written.contains("extern"));
        assert!(written.ends_with("int main() { PRINT(1); return 0; }\n"));
    }
}
