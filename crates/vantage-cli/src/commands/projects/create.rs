use vantage_core::entities::NewProject;

use crate::cli::GlobalFlags;
use crate::commands::shared::{notices, pages};
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::output;

pub struct CreateArgs<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub code: Option<&'a str>,
    pub budget: Option<f64>,
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
}

fn build_form(args: &CreateArgs<'_>) -> anyhow::Result<NewProject> {
    Ok(NewProject {
        name: args.name.to_string(),
        description: args.description.unwrap_or_default().to_string(),
        code: args.code.unwrap_or_default().to_string(),
        budget: args.budget.unwrap_or_default(),
        start_date: parse_date(args.start, "start")?,
        end_date: parse_date(args.end, "end")?,
    })
}

pub async fn run(
    args: CreateArgs<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = build_form(&args)?;

    let mut page = pages::projects(ctx).await;
    page.open_create_modal();
    *page.create_form_mut() = form;

    let created = page.create_project().await;
    if let Some(project) = &created {
        output(project, flags.format)?;
    }
    notices::flush(page.notices_mut());
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::{CreateArgs, build_form};

    #[test]
    fn missing_optional_fields_use_defaults() {
        let form = build_form(&CreateArgs {
            name: "Launch",
            description: None,
            code: None,
            budget: None,
            start: Some("2025-01-15"),
            end: None,
        })
        .expect("form should build");

        assert_eq!(form.name, "Launch");
        assert_eq!(form.description, "");
        assert_eq!(form.budget, 0.0);
        assert_eq!(form.start_date, NaiveDate::from_ymd_opt(2025, 1, 15));
        assert_eq!(form.end_date, None);
    }

    #[test]
    fn bad_date_is_rejected_before_any_request() {
        let err = build_form(&CreateArgs {
            name: "Launch",
            description: None,
            code: None,
            budget: Some(1_000.0),
            start: None,
            end: Some("next week"),
        })
        .expect_err("date should fail");
        assert!(err.to_string().contains("invalid end 'next week'"));
    }
}
