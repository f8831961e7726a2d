//! Context inference from staged file paths.
//!
//! Rules, first match wins:
//! 1. well-known files (`package.json`, `README.md`, `karma.conf.js`, ...)
//! 2. well-known basename prefixes (`yarn*`)
//! 3. path segments minus the repo-root segment, test directories, `index*`
//!    and boilerplate directories, plus the filename stem, at most
//!    [`MAX_CONTEXTS_PER_PATH`] of them
//!
//! Matching is case-insensitive, emitted contexts keep the path's case.

/// Upper bound on contexts taken from one path.
pub const MAX_CONTEXTS_PER_PATH: usize = 3;

/// Lower-cased basenames with a fixed context.
const WELL_KNOWN_FILES: &[(&str, &str)] = &[
    ("package.json", "pkg"),
    ("package-lock.json", "pkg"),
    ("readme.md", "readme"),
    ("changelog.md", "changelog"),
];

/// Lower-cased stems (basename minus its last extension) with a fixed context.
const WELL_KNOWN_STEMS: &[(&str, &str)] = &[
    ("karma.conf", "karma"),
    ("karma.config", "karma"),
    ("webpack.conf", "webpack"),
    ("webpack.config", "webpack"),
];

/// Lower-cased basename prefixes with a fixed context.
const WELL_KNOWN_PREFIXES: &[(&str, &str)] = &[("yarn", "yarn")];

/// Test and snapshot directories.
const TEST_DIRS: &[&str] = &[
    "__tests__",
    "__snapshots__",
    "__mocks__",
    "__fixtures__",
    "test",
    "tests",
    "spec",
    "specs",
];

/// Language, build-tool and source-root directories that say nothing about
/// the changed area.
const BOILERPLATE_DIRS: &[&str] = &[
    "src", "source", "sources", "lib", "libs", "app", "main", "java", "kotlin", "scala", "js",
    "ts", "python", "go", "rust", "resources", "assets", "public", "dist", "build", "target",
    "out", "bin", "node_modules", "vendor",
];

/// Contexts for a single staged path.
pub fn infer_path_contexts(path: &str) -> Vec<String> {
    let basename = path.rsplit('/').next().unwrap_or(path);
    let lower = basename.to_lowercase();

    if let Some(context) = fixed_context(&lower) {
        return vec![context.to_string()];
    }

    let stem = basename.split('.').next().unwrap_or("");
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let dirs = match segments.len() {
        0 | 1 => &[][..],
        n => &segments[1..n - 1],
    };

    let contexts: Vec<String> = dirs
        .iter()
        .copied()
        .chain(std::iter::once(stem))
        .filter(|segment| is_meaningful(segment))
        .take(MAX_CONTEXTS_PER_PATH)
        .map(str::to_string)
        .collect();

    if contexts.is_empty() && !stem.is_empty() {
        return vec![stem.to_string()];
    }
    contexts
}

/// Contexts for all staged paths, de-duplicated in first-seen order.
pub fn infer_contexts<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for context in paths.iter().flat_map(|p| infer_path_contexts(p.as_ref())) {
        if !unique.contains(&context) {
            unique.push(context);
        }
    }
    unique
}

fn fixed_context(lower_basename: &str) -> Option<&'static str> {
    let lower_stem = lower_basename
        .rsplit_once('.')
        .map_or(lower_basename, |(stem, _)| stem);

    lookup(WELL_KNOWN_FILES, lower_basename)
        .or_else(|| lookup(WELL_KNOWN_STEMS, lower_stem))
        .or_else(|| {
            WELL_KNOWN_PREFIXES
                .iter()
                .find(|(prefix, _)| lower_basename.starts_with(prefix))
                .map(|(_, context)| *context)
        })
}

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn is_meaningful(segment: &str) -> bool {
    let lower = segment.to_lowercase();
    !lower.is_empty()
        && !lower.starts_with("index")
        && !TEST_DIRS.contains(&lower.as_str())
        && !BOILERPLATE_DIRS.contains(&lower.as_str())
}
