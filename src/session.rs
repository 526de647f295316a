//! Console session: the menu loop driving one supply controller.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::config::SupplyConfig;
use crate::core::SupplySummary;
use crate::input::{parse_command, MenuCommand};
use crate::journal::Journal;
use crate::term::{ConsoleRenderer, Frame, SupplyView};

/// Run the menu loop until the player quits or `input` runs dry.
///
/// Returns the end-of-run summary that was printed.
pub fn run_session<R: BufRead, W: Write, J: Write>(
    config: &SupplyConfig,
    mut input: R,
    renderer: &mut ConsoleRenderer<W>,
    journal: &mut Journal<J>,
) -> Result<SupplySummary> {
    let mut supply = config.build_controller()?;
    let variant = supply.variant();
    let view = SupplyView::new();

    let mut snap = supply.snapshot();
    renderer.draw(&view.banner(&snap))?;
    journal.start(&snap);

    let mut raw = Vec::new();
    loop {
        supply.snapshot_into(&mut snap);
        renderer.draw(&view.state(&snap))?;
        renderer.draw(&view.menu(variant))?;
        renderer.draw_inline(&view.prompt())?;

        // Lines that are not UTF-8 fall through to the invalid-entry path.
        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            log::info!("input closed, ending session");
            let mut frame = Frame::new();
            frame.blank();
            renderer.draw(&frame)?;
            break;
        }

        let line = String::from_utf8_lossy(&raw);
        match parse_command(&line, variant) {
            None => {
                log::debug!("invalid entry {:?}", line.trim());
                journal.invalid(line.trim());
                renderer.draw(&view.invalid_entry(variant))?;
            }
            Some(MenuCommand::Quit) => break,
            Some(MenuCommand::Act(action)) => {
                let result = supply.apply(action);
                supply.snapshot_into(&mut snap);
                journal.action(action, &result, &snap);
                renderer.draw(&view.outcome(action, &result, &snap))?;
            }
        }
    }

    let summary = supply.summary();
    renderer.draw(&view.summary(&summary))?;
    journal.summary(&summary);
    journal.flush();
    Ok(summary)
}
