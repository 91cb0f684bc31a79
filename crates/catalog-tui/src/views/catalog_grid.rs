use ratatui::{layout::Constraint, prelude::*, widgets::*};

use crate::App;
use crate::state::LoadingState;

/// Render the full, unfiltered catalog as a table.
/// Shown whenever no search is active.
pub fn render_catalog_grid(f: &mut Frame, area: Rect, app: &App) {
    let state = app.store.state();
    let theme = &state.theme;

    let title = match &state.catalog.loading {
        LoadingState::NotLoaded => " Catalog ".to_string(),
        LoadingState::Loading => " Catalog (loading...) ".to_string(),
        LoadingState::Loaded => format!(" Catalog ({} items) ", state.catalog.store.len()),
        LoadingState::Failed(err) => format!(" Catalog (load failed: {err}) "),
    };

    let border_style = if matches!(state.catalog.loading, LoadingState::Failed(_)) {
        Style::default().fg(theme.status_error)
    } else {
        theme.panel_border()
    };

    let header = Row::new(vec!["ID", "Name", "Price", "Discount"]).style(
        Style::default()
            .fg(theme.table_header_fg)
            .bg(theme.table_header_bg)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = state.catalog.store.current().iter().map(Row::from).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Fill(3),
            Constraint::Length(12),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .style(Style::default().fg(theme.table_row_fg))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_style(theme.panel_title())
            .border_style(border_style),
    );

    f.render_widget(table, area);
}
