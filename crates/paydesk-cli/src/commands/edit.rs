use std::io::Write;

use paydesk_core::{SalaryApi, ScreenController};

use crate::commands::common::{
    ensure_listed, fill_form, load_salaries, parse_salary_id, submit_form, write_salaries,
    FormFields,
};
use crate::error::CliError;

pub async fn run_edit<A: SalaryApi>(
    api: A,
    id: &str,
    fields: &FormFields<'_>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if fields.is_empty() {
        return Err(CliError::NothingToEdit);
    }
    let id = parse_salary_id(id)?;

    let mut controller = ScreenController::new(api);
    load_salaries(&mut controller).await;
    ensure_listed(&controller, id)?;

    controller.open_edit(id)?;
    fill_form(controller.screen_mut(), fields)?;

    submit_form(&mut controller).await?;
    write_salaries(controller.screen(), false, out)
}
