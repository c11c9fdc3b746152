//! Nerd Fonts glyphs for entry names

use crate::core::EntryKind;

const FOLDER: &str = "\u{f07b}";
const FILE: &str = "\u{f15b}";

/// Folders with a dedicated glyph, matched case-insensitively
const FOLDER_NAMES: &[(&[&str], &str)] = &[
    (&[".git", ".github"], "\u{f1d3}"),
    (&[".config", "config", "configs", "src", "source"], "\u{e5fc}"),
    (&[".cargo", ".rustup"], "\u{e7a8}"),
    (&[".ssh"], "\u{f084}"),
    (&[".vscode"], "\u{e70c}"),
    (&["bin", "sbin", "scripts"], "\u{f489}"),
    (&["build", "dist", "out", "target", "vendor", "packages"], "\u{f487}"),
    (&["desktop"], "\u{f108}"),
    (&["doc", "docs", "documents"], "\u{f02d}"),
    (&["downloads"], "\u{f019}"),
    (&["images", "img", "pictures", "photos", "media"], "\u{f03e}"),
    (&["music", "audio"], "\u{f001}"),
    (&["videos", "video", "movies"], "\u{f008}"),
    (&["node_modules"], "\u{e718}"),
    (&["public", "www"], "\u{f0ac}"),
    (&["test", "tests"], "\u{f0c3}"),
    (&["tmp", "temp"], "\u{f252}"),
    (&["coding", "projects", "dev"], "\u{e5fc}"),
];

/// Files recognised by their whole name
const FILE_NAMES: &[(&[&str], &str)] = &[
    (&["cargo.toml", "cargo.lock"], "\u{e7a8}"),
    (&["package.json", "package-lock.json"], "\u{e71e}"),
    (&["makefile", "justfile", "cmakelists.txt"], "\u{e673}"),
    (&["dockerfile", "docker-compose.yml", "compose.yaml"], "\u{f308}"),
    (&[".gitignore", ".gitattributes", ".gitmodules"], "\u{f1d3}"),
    (&["license", "license.md", "copying"], "\u{f0219}"),
    (&["readme", "readme.md"], "\u{f48a}"),
];

/// Files recognised by extension
const EXTENSIONS: &[(&[&str], &str)] = &[
    (&["rs"], "\u{e7a8}"),
    (&["py", "pyi"], "\u{e73c}"),
    (&["js", "mjs", "cjs"], "\u{e74e}"),
    (&["ts", "mts"], "\u{e628}"),
    (&["jsx", "tsx"], "\u{e7ba}"),
    (&["go"], "\u{e627}"),
    (&["java", "jar"], "\u{e738}"),
    (&["c", "h"], "\u{e61e}"),
    (&["cpp", "cc", "hpp"], "\u{e61d}"),
    (&["rb"], "\u{e791}"),
    (&["php"], "\u{e608}"),
    (&["lua"], "\u{e620}"),
    (&["sh", "bash", "zsh", "fish"], "\u{e795}"),
    (&["html", "htm"], "\u{e736}"),
    (&["css", "scss", "sass"], "\u{e749}"),
    (&["json"], "\u{e60b}"),
    (&["yaml", "yml"], "\u{e6a8}"),
    (&["toml", "ini", "conf"], "\u{e6b2}"),
    (&["xml"], "\u{e796}"),
    (&["md", "markdown"], "\u{e609}"),
    (&["txt", "log"], "\u{f15c}"),
    (&["pdf"], "\u{f1c1}"),
    (&["png", "jpg", "jpeg", "gif", "webp", "bmp", "svg", "ico"], "\u{f1c5}"),
    (&["mp3", "flac", "wav", "ogg", "m4a"], "\u{f1c7}"),
    (&["mp4", "mkv", "webm", "avi", "mov"], "\u{f1c8}"),
    (&["zip", "tar", "gz", "xz", "bz2", "7z", "rar", "zst"], "\u{f1c6}"),
    (&["doc", "docx", "odt"], "\u{f1c2}"),
    (&["xls", "xlsx", "ods", "csv"], "\u{f1c3}"),
    (&["ppt", "pptx", "odp"], "\u{f1c4}"),
    (&["ttf", "otf", "woff", "woff2"], "\u{f031}"),
    (&["lock"], "\u{f023}"),
];

/// Glyph for an entry name
pub fn glyph_for(name: &str, kind: EntryKind) -> &'static str {
    let lower = name.to_lowercase();
    match kind {
        EntryKind::Directory => lookup(FOLDER_NAMES, &lower).unwrap_or(FOLDER),
        EntryKind::File => lookup(FILE_NAMES, &lower)
            .or_else(|| {
                let (_, ext) = lower.rsplit_once('.')?;
                lookup(EXTENSIONS, ext)
            })
            .unwrap_or(FILE),
    }
}

fn lookup(table: &[(&[&str], &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(keys, _)| keys.contains(&key))
        .map(|(_, glyph)| *glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_glyphs() {
        assert_eq!(glyph_for("src", EntryKind::Directory), "\u{e5fc}");
        assert_eq!(glyph_for("Downloads", EntryKind::Directory), "\u{f019}");
        assert_eq!(glyph_for("anything", EntryKind::Directory), FOLDER);
    }

    #[test]
    fn test_file_glyphs() {
        assert_eq!(glyph_for("main.rs", EntryKind::File), "\u{e7a8}");
        assert_eq!(glyph_for("Cargo.toml", EntryKind::File), "\u{e7a8}");
        assert_eq!(glyph_for("PHOTO.JPG", EntryKind::File), "\u{f1c5}");
        assert_eq!(glyph_for("archive.tar.gz", EntryKind::File), "\u{f1c6}");
    }

    #[test]
    fn test_unknown_and_extensionless() {
        assert_eq!(glyph_for("data.unknownext", EntryKind::File), FILE);
        assert_eq!(glyph_for("noext", EntryKind::File), FILE);
        assert_eq!(glyph_for("", EntryKind::File), FILE);
    }

    #[test]
    fn test_directory_named_like_file() {
        assert_eq!(glyph_for("notes.md", EntryKind::Directory), FOLDER);
    }
}
