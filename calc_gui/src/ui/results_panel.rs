//! Results Panel (Right Side)
//!
//! Shows the latest successful check: overall status, then each check with
//! its computed value against the limit. Until a check succeeds the panel
//! shows the not-checked notice.

use iced::widget::{column, container, scrollable, text, Column, Space};
use iced::{Element, Length};

use calc_core::checks::{CheckKind, CheckOutcome};
use calc_core::preview::NOT_CHECKED;
use calc_core::DesignSession;

use crate::Message;

/// Render the results panel
pub fn view_results_panel(session: &DesignSession) -> Element<'_, Message> {
    let content: Column<'_, Message> = match &session.results {
        Some(result) => {
            let overall = if result.passes() {
                text("ALL CHECKS PASS").size(16).color([0.2, 0.6, 0.2])
            } else {
                text("CHECKS FAILING").size(16).color([0.8, 0.2, 0.2])
            };

            let mut col = column![
                text("Design Check Results").size(14),
                Space::new().height(8),
                overall,
                Space::new().height(12),
            ]
            .spacing(4);

            for outcome in &result.checks {
                col = col.push(view_outcome(outcome));
            }

            col.push(Space::new().height(12))
                .push(text("Inputs").size(12))
                .push(text(format!("d0 = {} mm", result.input.bolt_diameter_mm)).size(11))
                .push(text(format!("n = {}", result.input.bolt_count)).size(11))
                .push(text(format!("L = {} mm", result.input.length_mm)).size(11))
                .push(text(format!("fy = {} MPa", result.input.fy_mpa)).size(11))
        }
        None => column![
            text("Design Check Results").size(14),
            Space::new().height(8),
            text(NOT_CHECKED).size(11).color([0.5, 0.5, 0.5]),
        ],
    };

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(40))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_outcome(outcome: &CheckOutcome) -> Element<'static, Message> {
    let comparison = match outcome.kind {
        CheckKind::EdgeDistance => "<",
        CheckKind::Spacing | CheckKind::Slenderness => "<=",
        CheckKind::TensionMember => ">=",
    };
    let colour: [f32; 3] = if outcome.passes { [0.2, 0.6, 0.2] } else { [0.8, 0.2, 0.2] };

    column![
        text(format!("{} Check: {}", outcome.kind.name(), outcome.status()))
            .size(12)
            .color(colour),
        text(format!(
            "  {:.2} {} {:.2}",
            outcome.value, comparison, outcome.limit
        ))
        .size(10),
    ]
    .spacing(2)
    .into()
}
