use std::io::{BufRead, Write};

use paydesk_core::screen::DeleteOutcome;
use paydesk_core::{SalaryApi, ScreenController};

use crate::commands::common::{
    confirm, ensure_listed, load_salaries, parse_salary_id, write_notices, write_salaries,
};
use crate::error::CliError;

pub async fn run_delete<A: SalaryApi>(
    api: A,
    id: &str,
    assume_yes: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let id = parse_salary_id(id)?;

    let mut controller = ScreenController::new(api);
    load_salaries(&mut controller).await;
    ensure_listed(&controller, id)?;

    let prompt = controller.request_delete(id)?;
    let confirmed = assume_yes || confirm(&prompt, input, out)?;

    match controller.answer_delete(confirmed).await {
        None => Err(CliError::DeleteAborted),
        Some(DeleteOutcome::Failed(message)) => Err(CliError::DeleteFailed(message)),
        Some(DeleteOutcome::Deleted { .. }) => {
            write_notices(controller.screen_mut(), out)?;
            write_salaries(controller.screen(), false, out)
        }
    }
}
