//! invocation
//!
//! Settings-to-arguments translation.
//!
//! # Design
//!
//! [`build_arguments`] is a pure function: no I/O, no environment access, no
//! failure modes. Unset optional fields are omitted, never errors. The
//! connection-string precondition is deliberately NOT checked here - that
//! belongs to the execution boundary in [`crate::runner`], which rejects an
//! invocation before this module is ever reached.
//!
//! # Ordering contract
//!
//! The emission order is frozen. Some consumers of the generated argument line
//! rely on positional prefixes for diagnostics, so the order below is a
//! contract, not an implementation detail:
//!
//! 1. Boolean flags, in the fixed ranking of the boolean-flag table. A false
//!    flag is omitted; the emitted subset preserves the ranking.
//! 2. Key-value flags, database group then grate group, in a fixed ranking.
//!    A flag is emitted only when the source value is set and non-empty
//!    (numeric zero counts as set).
//! 3. One `--usertokens=key=value` flag per user token, in first-insertion
//!    order.
//! 4. `--verbosity=<level>`, always present, always the final token.
//!
//! Values are rendered verbatim after the first `=`; embedded `=` or `;`
//! characters are not escaped. Token-boundary quoting is the execution
//! boundary's concern.

use crate::settings::GrateSettings;
use crate::ui::Verbosity;

/// Boolean flags in their frozen emission order.
///
/// Modeled as an explicit (flag, predicate) table rather than field order so
/// the ranking is visible and independently testable.
const BOOLEAN_FLAGS: &[(&str, fn(&GrateSettings) -> bool)] = &[
    ("--drop", |s| s.drop),
    ("--dryrun", |s| s.dry_run),
    ("--silent", |s| s.silent),
    ("--baseline", |s| s.baseline),
    ("--disabletokens", |s| s.disable_token_replacement),
    ("--runallanytimescripts", |s| s.run_all_any_time_scripts),
    ("--warnononetimescriptchanges", |s| {
        s.warn_on_one_time_script_changes
    }),
    ("--warnandignoreononetimescriptchanges", |s| {
        s.warn_and_ignore_on_one_time_script_changes
    }),
    ("--transaction", |s| s.with_transaction),
    ("--donotstorescriptsruntext", |s| {
        s.do_not_store_scripts_run_text
    }),
    ("--isuptodate", |s| s.is_up_to_date),
];

/// Translate a settings model plus the ambient verbosity into the ordered
/// grate argument list.
pub fn build_arguments(settings: &GrateSettings, verbosity: Verbosity) -> Vec<String> {
    let mut args = Vec::new();

    for (flag, enabled) in BOOLEAN_FLAGS {
        if enabled(settings) {
            args.push((*flag).to_string());
        }
    }

    // Database connection group.
    push_number(&mut args, "commandtimeout", settings.command_timeout);
    push_number(&mut args, "admincommandtimeout", settings.command_timeout_admin);
    push_text(&mut args, "connectionstring", &settings.connection_string);
    push_text(
        &mut args,
        "adminconnectionstring",
        &settings.connection_string_admin,
    );
    push_text(&mut args, "restore", &settings.restore);
    push_text(&mut args, "schemaname", &settings.schema_name);
    push_text(&mut args, "accesstoken", &settings.access_token);

    // Grate/migration group. The capital P in outputPath matches grate's own
    // flag surface.
    push_text(&mut args, "databasetype", &settings.database_type);
    push_text(&mut args, "environment", &settings.environment);
    push_text(&mut args, "outputPath", &settings.output_path);
    push_text(&mut args, "sqlfilesdirectory", &settings.sql_files_directory);
    push_text(&mut args, "folders", &settings.folders);
    push_text(&mut args, "version", &settings.version);
    push_text(&mut args, "repositorypath", &settings.repository_path);

    for (key, value) in settings.user_tokens.iter() {
        args.push(format!("--usertokens={}={}", key, value));
    }

    args.push(format!("--verbosity={}", verbosity.grate_level()));

    args
}

/// Emit a `--name=value` flag for a set, non-empty string value.
fn push_text(args: &mut Vec<String>, name: &str, value: &Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            args.push(format!("--{}={}", name, value));
        }
    }
}

/// Emit a `--name=value` flag for a set numeric value. Zero counts as set.
fn push_number(args: &mut Vec<String>, name: &str, value: Option<i32>) {
    if let Some(value) = value {
        args.push(format!("--{}={}", name, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_settings() -> GrateSettings {
        let mut settings = GrateSettings::new();
        settings.connection_string = Some("server=foo;db=bar".to_string());
        settings
    }

    #[test]
    fn all_booleans_emit_in_frozen_order() {
        let mut settings = base_settings();
        settings.drop = true;
        settings.dry_run = true;
        settings.silent = true;
        settings.baseline = true;
        settings.run_all_any_time_scripts = true;
        settings.disable_token_replacement = true;
        settings.warn_on_one_time_script_changes = true;
        settings.warn_and_ignore_on_one_time_script_changes = true;
        settings.with_transaction = true;
        settings.do_not_store_scripts_run_text = true;
        settings.is_up_to_date = true;

        let args = build_arguments(&settings, Verbosity::Normal);
        assert_eq!(
            &args[..11],
            &[
                "--drop",
                "--dryrun",
                "--silent",
                "--baseline",
                "--disabletokens",
                "--runallanytimescripts",
                "--warnononetimescriptchanges",
                "--warnandignoreononetimescriptchanges",
                "--transaction",
                "--donotstorescriptsruntext",
                "--isuptodate",
            ]
        );
    }

    #[test]
    fn no_booleans_set_emits_no_bare_flags() {
        let args = build_arguments(&base_settings(), Verbosity::Normal);
        assert!(args.iter().all(|token| token.contains('=')));
    }

    #[test]
    fn emitted_boolean_subset_preserves_ranking() {
        let mut settings = base_settings();
        settings.baseline = true;
        settings.is_up_to_date = true;
        settings.dry_run = true;

        let args = build_arguments(&settings, Verbosity::Normal);
        assert_eq!(&args[..3], &["--dryrun", "--baseline", "--isuptodate"]);
    }

    #[test]
    fn database_group_emits_in_frozen_order() {
        let mut settings = GrateSettings::new();
        settings.command_timeout = Some(12);
        settings.command_timeout_admin = Some(23);
        settings.connection_string = Some("server=foo;db=bar".to_string());
        settings.connection_string_admin = Some("server=fooAd;db=barAd".to_string());
        settings.restore = Some("/backs/restore".to_string());
        settings.schema_name = Some("RH".to_string());
        settings.access_token = Some("ac".to_string());

        let args = build_arguments(&settings, Verbosity::Normal);
        assert_eq!(
            args,
            vec![
                "--commandtimeout=12",
                "--admincommandtimeout=23",
                "--connectionstring=server=foo;db=bar",
                "--adminconnectionstring=server=fooAd;db=barAd",
                "--restore=/backs/restore",
                "--schemaname=RH",
                "--accesstoken=ac",
                "--verbosity=Information",
            ]
        );
    }

    #[test]
    fn grate_group_emits_in_frozen_order() {
        let mut settings = base_settings();
        settings.database_type = Some("roundhouse.databases.postgresql".to_string());
        settings.environment = Some("STAGING".to_string());
        settings.output_path = Some("out_path".to_string());
        settings.sql_files_directory = Some("/db/scripts".to_string());
        settings.version = Some("1.1.1.1".to_string());
        settings.folders =
            Some("up=ddl;views=projections;beforemigration=preparefordeploy".to_string());
        settings.repository_path = Some("RepositoryPath".to_string());

        let args = build_arguments(&settings, Verbosity::Normal);
        assert_eq!(
            args,
            vec![
                "--connectionstring=server=foo;db=bar",
                "--databasetype=roundhouse.databases.postgresql",
                "--environment=STAGING",
                "--outputPath=out_path",
                "--sqlfilesdirectory=/db/scripts",
                "--folders=up=ddl;views=projections;beforemigration=preparefordeploy",
                "--version=1.1.1.1",
                "--repositorypath=RepositoryPath",
                "--verbosity=Information",
            ]
        );
    }

    #[test]
    fn zero_timeout_counts_as_set() {
        let mut settings = base_settings();
        settings.command_timeout = Some(0);

        let args = build_arguments(&settings, Verbosity::Normal);
        assert!(args.contains(&"--commandtimeout=0".to_string()));
    }

    #[test]
    fn empty_string_value_suppresses_flag() {
        let mut settings = base_settings();
        settings.schema_name = Some(String::new());

        let args = build_arguments(&settings, Verbosity::Normal);
        assert!(!args.iter().any(|token| token.starts_with("--schemaname")));
    }

    #[test]
    fn values_keep_embedded_separators_verbatim() {
        let mut settings = GrateSettings::new();
        settings.connection_string = Some("server=foo;db=bar;user=a=b".to_string());

        let args = build_arguments(&settings, Verbosity::Normal);
        assert_eq!(args[0], "--connectionstring=server=foo;db=bar;user=a=b");
    }

    #[test]
    fn user_tokens_emit_one_flag_each_in_insertion_order() {
        let mut settings = base_settings();
        settings.user_tokens = vec![("a", "apple")].into_iter().collect();
        settings.set_user_token("b", "banana");

        let args = build_arguments(&settings, Verbosity::Normal);
        let tokens: Vec<_> = args
            .iter()
            .filter(|token| token.starts_with("--usertokens="))
            .collect();
        assert_eq!(tokens, vec!["--usertokens=a=apple", "--usertokens=b=banana"]);
    }

    #[test]
    fn verbosity_is_always_the_final_token() {
        for (verbosity, expected) in [
            (Verbosity::Quiet, "--verbosity=None"),
            (Verbosity::Minimal, "--verbosity=Warning"),
            (Verbosity::Normal, "--verbosity=Information"),
            (Verbosity::Verbose, "--verbosity=Debug"),
            (Verbosity::Diagnostic, "--verbosity=Trace"),
        ] {
            let args = build_arguments(&base_settings(), verbosity);
            assert_eq!(args.last().map(String::as_str), Some(expected));
        }
    }

    #[test]
    fn empty_model_still_emits_verbosity() {
        let args = build_arguments(&GrateSettings::new(), Verbosity::Quiet);
        assert_eq!(args, vec!["--verbosity=None"]);
    }

    #[test]
    fn repeated_builds_are_identical() {
        let mut settings = base_settings();
        settings.drop = true;
        settings.environment = Some("PROD".to_string());
        settings.set_user_token("a", "apple");

        let first = build_arguments(&settings, Verbosity::Verbose);
        let second = build_arguments(&settings, Verbosity::Verbose);
        assert_eq!(first, second);
    }
}
