//! Shared fixtures for integration tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Content a file holds once the stub formatter has rewritten it.
pub const CANONICAL_CONTENT: &str = "// formatted\n";

/// Write an executable stand-in for clang-format into `dir`.
///
/// The script mimics the three invocations the crate makes: `--version`
/// (availability probe), `-i <file>` (in-place rewrite to the canonical
/// content), and `-n --Werror <file>` (exit 0 only when the file already
/// starts with the canonical line).
pub fn write_stub_formatter(dir: &Path) -> PathBuf {
    let path = dir.join("stub-clang-format");
    let script = "#!/bin/sh\n\
        case \"$1\" in\n\
          --version)\n\
            echo \"stub clang-format 1.0\"\n\
            exit 0\n\
            ;;\n\
          -i)\n\
            printf '// formatted\\n' > \"$2\"\n\
            exit 0\n\
            ;;\n\
          -n)\n\
            head -n 1 \"$3\" | grep -q '^// formatted$'\n\
            exit $?\n\
            ;;\n\
        esac\n\
        exit 2\n";
    fs::write(&path, script).unwrap();

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();

    path
}

/// Write a stub formatter whose in-place mode always fails.
///
/// Probes with `--version` still succeed, so installation is considered
/// fine; only the per-file edits report errors.
pub fn write_failing_stub_formatter(dir: &Path) -> PathBuf {
    let path = dir.join("failing-clang-format");
    let script = "#!/bin/sh\n\
        if [ \"$1\" = \"--version\" ]; then\n\
          echo \"stub clang-format 1.0\"\n\
          exit 0\n\
        fi\n\
        echo \"cannot parse input\" >&2\n\
        exit 1\n";
    fs::write(&path, script).unwrap();

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();

    path
}
