use std::io::Write;

use paydesk_core::{SalaryApi, ScreenController};

use crate::commands::common::{fill_form, submit_form, write_salaries, FormFields};
use crate::error::CliError;

pub async fn run_add<A: SalaryApi>(
    api: A,
    fields: &FormFields<'_>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut controller = ScreenController::new(api);
    controller.open_create();
    fill_form(controller.screen_mut(), fields)?;

    submit_form(&mut controller).await?;
    write_salaries(controller.screen(), false, out)
}
