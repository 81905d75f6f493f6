use std::io::Write;

use paydesk_core::{SalaryApi, ScreenController};

use crate::cli::ListArgs;
use crate::commands::common::{apply_list_args, load_salaries, write_salaries};
use crate::error::CliError;

pub async fn run_list<A: SalaryApi>(
    api: A,
    args: &ListArgs,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut controller = ScreenController::new(api);
    load_salaries(&mut controller).await;

    apply_list_args(controller.screen_mut(), args);
    write_salaries(controller.screen(), args.json, out)
}
