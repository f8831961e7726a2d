//! Integration tests for context inference through the pipeline.

mod common;

use common::*;
use git_commit_msg::Config;

fn transform(message: &str) -> String {
    pipeline_without_suggestions(Config::default()).transform(message)
}

fn staged(paths: &[(&str, &str)]) -> String {
    let mut lines = vec!["# Changes to be committed:".to_string()];
    for (change, path) in paths {
        lines.push(format!("#\t{change}:   {path}"));
    }
    lines.push("#".to_string());
    lines.join("\n")
}

#[test]
fn test_minimal_staged_block() {
    let message = "# Changes to be committed:\n\
                   #\tmodified:   modified-file.txt\n\
                   #\tdeleted:    deleted-file.txt\n\
                   #\tnew file:   new-file.txt\n\
                   #\n";
    let out = transform(message);
    assert_eq!(
        context_report(&out),
        "# Found 3 contexts\n#     * modified-file\n#     * deleted-file\n#     * new-file"
    );
    assert!(out.starts_with("# Found 3 contexts\n"));
    assert!(out.ends_with(message));
}

#[test]
fn test_nothing_staged() {
    let message = "# Changes not staged for commit:\n\
                   #\tdeleted:    deleted-not-staged.txt\n\
                   #\tmodified:   modified-not-staged.txt\n\
                   #";
    assert_eq!(transform(message), message);
}

#[test]
fn test_no_contexts() {
    let out = transform("# Changes to be committed:\n#");
    assert_eq!(context_report(&out), "# Found no contexts");
}

#[test]
fn test_full_template_ignores_unstaged_and_untracked() {
    let message = git_template("my commit message", "master", THREE_FILES);
    let out = transform(&message);
    assert_eq!(
        context_report(&out),
        "# Found 3 contexts\n#     * modified-file\n#     * deleted-file\n#     * new-file"
    );
    assert_eq!(without_report(&out), message);
}

#[test]
fn test_report_sits_above_git_comments() {
    let message = git_template("my commit message", "master", THREE_FILES);
    let out = transform(&message);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "my commit message");
    assert_eq!(lines[1], "# Found 3 contexts");
    assert_eq!(
        lines[5],
        "# TYPES: chore, docs, feat, fix, refactor, style, test, type, perf, ci"
    );
    assert!(lines[6].starts_with("# Please enter the commit message"));
}

#[test]
fn test_snapshot_directories() {
    let out = transform(&staged(&[("modified", "src/foo/__snapshots__/index.js")]));
    assert_eq!(context_report(&out), "# Found 1 context\n#     * foo");

    let out = transform(&staged(&[("modified", "src/__snapshots__/index.js")]));
    assert_eq!(context_report(&out), "# Found 1 context\n#     * index");
}

#[test]
fn test_well_known_files() {
    let out = transform(&staged(&[
        ("modified", "package.json"),
        ("deleted", "package.json"),
        ("new file", "package.json"),
    ]));
    assert_eq!(context_report(&out), "# Found 1 context\n#     * pkg");

    let out = transform(&staged(&[("modified", "webpack.config.ts")]));
    assert_eq!(context_report(&out), "# Found 1 context\n#     * webpack");

    let out = transform(&staged(&[("modified", "src/webpack/index.js")]));
    assert_eq!(context_report(&out), "# Found 1 context\n#     * webpack");
}

#[test]
fn test_collects_directory_contexts() {
    let out = transform(&staged(&[("new file", "my-project/baz/BAR/FOO/index.ts")]));
    assert_eq!(
        context_report(&out),
        "# Found 3 contexts\n#     * baz\n#     * BAR\n#     * FOO"
    );
}

#[test]
fn test_removes_extensions_and_preserves_case() {
    let out = transform(&staged(&[
        ("modified", "MODIFIED_FILE.ts"),
        ("deleted", "DeLeTeDFiLe.js"),
        ("new file", "newfile.txt"),
    ]));
    assert_eq!(
        context_report(&out),
        "# Found 3 contexts\n#     * MODIFIED_FILE\n#     * DeLeTeDFiLe\n#     * newfile"
    );
}

#[test]
fn test_skip_emoji_still_infers_context() {
    let config = Config {
        skip_emoji_annotation: true,
        skip_auto_suggest: true,
    };
    let message = git_template("feat: add", "master", &[("modified", "README.md")]);
    let out = pipeline_without_suggestions(config).transform(&message);
    assert_eq!(headline(&out), "feat: add");
    assert_eq!(context_report(&out), "# Found 1 context\n#     * readme");
}
