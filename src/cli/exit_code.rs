use super::commands::CommandResult;
use super::exit_status::ExitStatus;

/// Any error-severity issue (a fatal extraction error or an unparseable
/// file) fails the command.
pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.error_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::commands::{CommandKind, CommandSummary, InitSummary, helper::finish};
    use crate::cli::exit_code::*;
    use crate::core::{SourceContext, SourceLocation};
    use crate::issues::{Issue, ParseErrorIssue, PluralComponentIssue};

    fn result_with(issues: Vec<Issue>) -> CommandResult {
        finish(
            CommandKind::Init,
            CommandSummary::Init(InitSummary { created: false }),
            issues,
            0,
        )
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let warning = Issue::PluralComponent(PluralComponentIssue {
            context: SourceContext::new(SourceLocation::new("a.tsx", 1, 1), ""),
            component: "FormattedPlural".to_string(),
        });
        let result = result_with(vec![warning]);
        assert_eq!(result.warning_count, 1);
        assert_eq!(exit_status_from_result(&result), ExitStatus::Success);
    }

    #[test]
    fn test_errors_fail() {
        let error = Issue::ParseError(ParseErrorIssue {
            file_path: "a.tsx".to_string(),
            error: "1:1: Unexpected token".to_string(),
        });
        let result = result_with(vec![error]);
        assert_eq!(result.parse_error_count, 1);
        assert_eq!(exit_status_from_result(&result), ExitStatus::Failure);
    }
}
