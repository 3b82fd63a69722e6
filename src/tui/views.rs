//! TUI Views
//!
//! Rendering for the four screens plus the shared header, footer and help
//! overlay. Views read `&AppState` and never mutate it.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

use super::app::slot_value;
use super::colors;
use super::input::TextInput;
use super::state::{AppState, EditTarget, InteractionMode, LabSection, LabSlot, PrioritizationField, View};
use crate::content::{COURSE_BADGE, COURSE_PITCH, LESSONS, Lesson};
use crate::domain::Track;
use crate::ledger::{InventoryField, Ledger};

/// A full-body screen
pub trait Screen {
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState);

    fn title(&self) -> &'static str;
}

/// Render the whole frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)])
        .split(frame.area());

    render_header(frame, chunks[0], state);

    let screen: &dyn Screen = match state.current_view {
        View::Home => &HomeScreen,
        View::Feed => &FeedScreen,
        View::Guide => &GuideScreen,
        View::Lab => &LabScreen,
    };
    screen.render(frame, chunks[1], state);

    render_footer(frame, chunks[2], state);

    if state.interaction_mode == InteractionMode::Help {
        let area = frame.area();
        render_help(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut tabs = vec![Span::styled(
        " MicroDSI ",
        Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
    )];
    for (i, view) in View::ALL.iter().enumerate() {
        let style = if *view == state.current_view {
            Style::default().fg(colors::SELECTED).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(colors::DIM)
        };
        tabs.push(Span::raw(" "));
        tabs.push(Span::styled(format!("[{}] {}", i + 1, view.name()), style));
    }
    tabs.push(Span::raw("   "));
    tabs.push(Span::styled(
        format!("Track: {}", state.track.label()),
        Style::default().fg(colors::ACCENT).add_modifier(Modifier::BOLD),
    ));

    let header = Paragraph::new(Line::from(tabs)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.status_message {
        Some(message) => Line::from(Span::styled(message.clone(), Style::default().fg(colors::ACCENT))),
        None => Line::from(Span::styled(key_hints(state), Style::default().fg(colors::KEYBIND))),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Footer hints for the current view and mode.
pub fn key_hints(state: &AppState) -> &'static str {
    if state.is_editing() {
        return "Enter guardar · Esc cancelar";
    }
    match state.current_view {
        View::Home => "Enter empezar · t track · Tab vista · ? ayuda · q salir",
        View::Feed => "↑↓ tarjeta · Espacio marcar · Enter pistas · t track · q salir",
        View::Guide => "←→ paso · Enter responder · t track · q salir",
        View::Lab => "↑↓ campo · Enter editar · ←→ valorar · a añadir · d borrar · e exportar · q salir",
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered(area, 60, 14);
    let lines = vec![
        Line::from("Tab / Shift+Tab   cambiar vista"),
        Line::from("1-4               ir a Inicio, Feed, Pistas, Lab"),
        Line::from("t / T             siguiente / anterior track"),
        Line::from("Enter             editar el campo enfocado"),
        Line::from("Esc               descartar la edición"),
        Line::from("←→ (Lab)          ajustar Impacto, Esfuerzo o Riesgo"),
        Line::from("a / d (Lab)       añadir / borrar fila"),
        Line::from("e (Lab)           exportar el entregable"),
        Line::from("q / Ctrl+C        salir"),
        Line::from(""),
        Line::from(Span::styled("Pulsa cualquier tecla para cerrar", Style::default().fg(colors::DIM))),
    ];
    let help = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Ayuda "));
    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Editor text with a bar at the cursor.
fn with_cursor(editor: &TextInput) -> String {
    let (before, after) = editor.content().split_at(editor.cursor());
    format!("{}▏{}", before, after)
}

fn value_span(value: &str, placeholder: &str) -> Span<'static> {
    if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(colors::DIM))
    } else {
        Span::raw(value.to_string())
    }
}

pub struct HomeScreen;

impl Screen for HomeScreen {
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = vec![
            Line::from(Span::styled(COURSE_BADGE, Style::default().fg(colors::ACCENT))),
            Line::from(""),
            Line::from(Span::styled(
                "Micro-learning para identificar procesos",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(COURSE_PITCH),
            Line::from(""),
            Line::from("Elige tu track:"),
        ];
        for track in Track::ALL {
            let selected = track == state.track;
            let marker = if selected { "●" } else { "○" };
            let style = if selected {
                Style::default().fg(colors::SELECTED).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(format!("  {} {}", marker, track.label()), style)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Pulsa Enter para empezar",
            Style::default().fg(colors::KEYBIND),
        )));

        let home = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(format!(" {} ", self.title())));
        frame.render_widget(home, area);
    }

    fn title(&self) -> &'static str {
        "Inicio"
    }
}

pub struct FeedScreen;

impl FeedScreen {
    fn format_card(lesson: &Lesson, track: Track, marked: bool, selected: bool) -> ListItem<'static> {
        let mark = if marked { "[x]" } else { "[ ]" };
        let mark_style = if marked {
            Style::default().fg(colors::MARKED).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::DIM)
        };
        let style = if selected {
            Style::default().bg(colors::HIGHLIGHT_BG)
        } else {
            Style::default()
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", mark), mark_style),
                Span::styled(lesson.tag.to_string(), Style::default().fg(colors::ACCENT)),
            ]),
            Line::from(Span::styled(
                format!("    {}", lesson.title),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("    {}", lesson.text)),
            Line::from(Span::styled(
                format!("    {}", lesson.examples(track).join(" · ")),
                Style::default().fg(colors::HEADER),
            )),
            Line::from(Span::styled(
                format!("    ✎ {}", lesson.check),
                Style::default().fg(colors::DIM),
            )),
            Line::from(""),
        ];
        ListItem::new(lines).style(style)
    }
}

impl Screen for FeedScreen {
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = LESSONS
            .iter()
            .enumerate()
            .map(|(i, lesson)| {
                Self::format_card(
                    lesson,
                    state.track,
                    state.feed_marks.contains(&i),
                    i == state.feed_selected,
                )
            })
            .collect();

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(format!(
            " {} (marcadas {}/{}) ",
            self.title(),
            state.feed_marks.len(),
            LESSONS.len()
        )));
        let mut list_state = ListState::default().with_selected(Some(state.feed_selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn title(&self) -> &'static str {
        "Feed"
    }
}

pub struct GuideScreen;

impl Screen for GuideScreen {
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(4), Constraint::Min(3)])
            .split(area);

        let guide = &state.guide;
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(format!(" {} ", self.title())))
            .gauge_style(Style::default().fg(colors::ACCENT))
            .ratio(guide.progress().clamp(0.0, 1.0))
            .label(guide.progress_label());
        frame.render_widget(gauge, chunks[0]);

        let step = guide.current();
        let question = Paragraph::new(step.question)
            .wrap(Wrap { trim: false })
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).title(" Pregunta "));
        frame.render_widget(question, chunks[1]);

        let answer = if state.interaction_mode == InteractionMode::Editing(EditTarget::GuideAnswer) {
            Span::styled(with_cursor(&state.editor), Style::default().fg(colors::SELECTED))
        } else {
            value_span(guide.answer(), step.placeholder)
        };
        let title = if guide.is_last() {
            " Respuesta (→ continúa en el Lab) "
        } else {
            " Respuesta "
        };
        let answer = Paragraph::new(Line::from(answer))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(answer, chunks[2]);
    }

    fn title(&self) -> &'static str {
        "Pistas"
    }
}

pub struct LabScreen;

impl LabScreen {
    fn section_heading(section: LabSection) -> &'static str {
        match section {
            LabSection::Inventory => "1) Inventario (L1)",
            LabSection::Prioritization => "2) Priorización (Top 5)",
            LabSection::Sipoc => "3) SIPOC (Proceso Ganador)",
            LabSection::AiLog => "AI Log",
        }
    }

    /// Row label, e.g. "#2 Verbo" or "#1 Impacto".
    fn slot_label(ledger: &Ledger, slot: &LabSlot) -> String {
        match slot {
            LabSlot::Inventory { id, field } => {
                let n = row_number(ledger.inventory().iter().map(|i| i.id.as_str()), id);
                format!("#{} {}", n, field.label())
            }
            LabSlot::Prioritization { id, field } => {
                let n = row_number(ledger.prioritization().iter().map(|p| p.id.as_str()), id);
                let name = match field {
                    PrioritizationField::Name => "Proceso",
                    PrioritizationField::Rating(axis) => axis.label(),
                    PrioritizationField::Note => "Nota",
                };
                format!("#{} {}", n, name)
            }
            LabSlot::Sipoc(field) => field.label().to_string(),
            LabSlot::AiLog(field) => field.label().to_string(),
        }
    }

    fn slot_placeholder(slot: &LabSlot) -> &'static str {
        match slot {
            LabSlot::Inventory { field, .. } => field.placeholder(),
            LabSlot::Prioritization { field, .. } => match field {
                PrioritizationField::Name => "Nombre del proceso",
                PrioritizationField::Rating(_) => "",
                PrioritizationField::Note => "Nota breve",
            },
            LabSlot::Sipoc(field) => field.placeholder(),
            LabSlot::AiLog(field) => field.placeholder(),
        }
    }

    fn format_slot(state: &AppState, slot: &LabSlot, focused: bool) -> ListItem<'static> {
        let ledger = &state.ledger;
        let label = Self::slot_label(ledger, slot);
        let editing = state.interaction_mode == InteractionMode::Editing(EditTarget::Lab(slot.clone()));

        let value = if editing {
            Span::styled(with_cursor(&state.editor), Style::default().fg(colors::SELECTED))
        } else if let LabSlot::Prioritization {
            field: PrioritizationField::Rating(_),
            ..
        } = slot
        {
            let rating = slot_value(ledger, slot);
            Span::styled(format!("◂ {} ▸", rating), Style::default().fg(colors::ACCENT))
        } else {
            value_span(&slot_value(ledger, slot), Self::slot_placeholder(slot))
        };

        let mut spans = vec![Span::styled(format!("  {:<22} ", label), Style::default().fg(colors::DIM)), value];

        // Live score on the name line
        if let LabSlot::Prioritization {
            id,
            field: PrioritizationField::Name,
        } = slot
            && let Some(item) = ledger.prioritization().iter().find(|p| &p.id == id)
        {
            let score = item.score();
            let color = if score >= 0 { colors::SCORE_POS } else { colors::SCORE_NEG };
            spans.push(Span::styled(format!("  score {}", score), Style::default().fg(color)));
        }

        let style = if focused {
            Style::default().bg(colors::HIGHLIGHT_BG).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        ListItem::new(Line::from(spans)).style(style)
    }
}

fn row_number<'a>(mut ids: impl Iterator<Item = &'a str>, id: &str) -> usize {
    ids.position(|candidate| candidate == id).map_or(0, |p| p + 1)
}

impl Screen for LabScreen {
    fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let slots = state.lab_slots();
        let mut items = Vec::with_capacity(slots.len() + 4);
        let mut focused_row = 0;
        let mut section = None;

        for (i, slot) in slots.iter().enumerate() {
            if section != Some(slot.section()) {
                section = Some(slot.section());
                items.push(ListItem::new(Line::from(Span::styled(
                    Self::section_heading(slot.section()),
                    Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD),
                ))));
            }
            // A blank line before each new inventory row keeps pairs readable.
            if let LabSlot::Inventory {
                field: InventoryField::Verb,
                ..
            } = slot
                && i > 0
            {
                items.push(ListItem::new(""));
            }
            let focused = i == state.lab_cursor;
            if focused {
                focused_row = items.len();
            }
            items.push(Self::format_slot(state, slot, focused));
        }

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} · Track {} ", self.title(), state.track.label())),
        );
        let mut list_state = ListState::default().with_selected(Some(focused_row));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn title(&self) -> &'static str {
        "Lab"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::Guide;
    use crate::ledger::PrioritizationUpdate;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(state, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_screen_titles() {
        assert_eq!(HomeScreen.title(), "Inicio");
        assert_eq!(FeedScreen.title(), "Feed");
        assert_eq!(GuideScreen.title(), "Pistas");
        assert_eq!(LabScreen.title(), "Lab");
    }

    #[test]
    fn test_home_shows_badge_and_tracks() {
        let state = AppState::default();
        let screen = draw(&state, 100, 30);
        assert!(screen.contains("MicroDSI · M2-S10"));
        assert!(screen.contains("● ITSM"));
        assert!(screen.contains("○ PROC"));
        assert!(screen.contains("Track: ITSM"));
    }

    #[test]
    fn test_feed_examples_follow_track() {
        let mut state = AppState::new(Guide::new(Track::Hr));
        state.current_view = View::Feed;
        state.feed_marks.insert(0);
        let screen = draw(&state, 120, 30);
        assert!(screen.contains("Baseline: medir antes de cambiar"));
        assert!(screen.contains("Registrar Candidato"));
        assert!(!screen.contains("Gestionar Incidente"));
        assert!(screen.contains("marcadas 1/3"));
        assert!(screen.contains("[x]"));
    }

    #[test]
    fn test_guide_shows_question_and_progress() {
        let mut state = AppState::default();
        state.current_view = View::Guide;
        let screen = draw(&state, 100, 20);
        assert!(screen.contains("trigger principal"));
        assert!(screen.contains("Paso 1 de 3"));
        assert!(screen.contains("Ej: Llega un correo"));
    }

    #[test]
    fn test_lab_shows_sections_and_score() {
        let mut state = AppState::default();
        state.current_view = View::Lab;
        let id = state.ledger.prioritization()[0].id.clone();
        state
            .ledger
            .update_prioritization(&id, PrioritizationUpdate::Name("Triage".to_string()));
        let screen = draw(&state, 100, 40);
        assert!(screen.contains("1) Inventario (L1)"));
        assert!(screen.contains("2) Priorización"));
        assert!(screen.contains("Triage"));
        assert!(screen.contains("score -3"));
        assert!(screen.contains("◂ 3 ▸"));
    }

    #[test]
    fn test_help_overlay() {
        let mut state = AppState::default();
        state.interaction_mode = InteractionMode::Help;
        let screen = draw(&state, 100, 30);
        assert!(screen.contains("Ayuda"));
        assert!(screen.contains("exportar el entregable"));
    }

    #[test]
    fn test_status_replaces_hints() {
        let mut state = AppState::default();
        assert!(draw(&state, 100, 20).contains("Enter empezar"));
        state.status_message = Some("Exportado".to_string());
        let screen = draw(&state, 100, 20);
        assert!(screen.contains("Exportado"));
        assert!(!screen.contains("Enter empezar"));
    }

    #[test]
    fn test_with_cursor_marks_position() {
        let mut editor = TextInput::with_content("abc");
        editor.move_left();
        assert_eq!(with_cursor(&editor), "ab▏c");
    }
}
