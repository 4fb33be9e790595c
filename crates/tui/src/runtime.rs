//! Terminal runtime and event loop.

use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use hoverpick_popup::{
	CloseReason, HoverPopup, Point, PopupDelegate, PopupFlags, PopupSession, SessionToken,
};
use log::{debug, info};
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use ratatui::crossterm::execute;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;
use ratatui::{DefaultTerminal, Frame};
use serde::Serialize;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::delegate::LabelDelegate;
use crate::input::FrameInput;
use crate::surface::TuiSurface;
use crate::theme::Theme;

/// Height of the log pane, borders included.
pub const LOG_PANE_HEIGHT: u16 = 8;

/// How a picker session is run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
	pub theme: Theme,
	/// Show captured log records below the popup.
	pub show_log: bool,
	pub initial_query: String,
}

/// Result of a picker session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickOutcome<T> {
	/// The user confirmed a selection with Enter or a click.
	pub accepted: bool,
	pub query: String,
	/// Item selected last, confirmed or not.
	pub selection: Option<T>,
	/// Why the popup closed, if it closed on its own.
	pub closed: Option<CloseReason>,
}

/// Show `items` in a popup and run until the user picks one or dismisses it.
pub fn run<T>(items: Vec<T>, popup: &HoverPopup, options: RunOptions) -> Result<PickOutcome<T>>
where
	T: AsRef<str> + Clone,
{
	let mut picker = Picker::new(items, popup, options);
	let mut terminal = ratatui::init();
	let result = execute!(stdout(), EnableMouseCapture)
		.map_err(anyhow::Error::from)
		.and_then(|()| picker.run(&mut terminal));

	ratatui::restore();
	execute!(stdout(), DisableMouseCapture)?;

	result
}

struct Picker<'a, T> {
	items: Vec<T>,
	popup: &'a HoverPopup,
	theme: Theme,
	show_log: bool,
	session: PopupSession<T>,
	surface: TuiSurface,
	delegate: LabelDelegate<T>,
	search: String,
	token: Option<SessionToken>,
	pointer: Point,
}

impl<'a, T> Picker<'a, T>
where
	T: AsRef<str> + Clone,
{
	fn new(items: Vec<T>, popup: &'a HoverPopup, options: RunOptions) -> Self {
		Self {
			items,
			popup,
			theme: options.theme,
			show_log: options.show_log,
			session: PopupSession::new(),
			surface: TuiSurface::new(),
			delegate: LabelDelegate::new(),
			search: options.initial_query,
			token: None,
			pointer: Point::default(),
		}
	}

	/// Pump the terminal event loop until the picker finishes.
	fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<PickOutcome<T>> {
		terminal.clear()?;
		info!("showing {} items", self.items.len());

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = Vec::new();

		let result: Result<PickOutcome<T>> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let size = match terminal.size() {
				Ok(size) => size,
				Err(err) => break Err(err.into()),
			};
			let area = Rect::from((Position::ORIGIN, size));
			if let Some(outcome) = self.step(&pending_events, area) {
				break Ok(outcome);
			}
			pending_events.clear();

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(Duration::from_millis(16));
		};

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}

	/// Area the popup may occupy, leaving room for the log pane.
	fn popup_area(&self, area: Rect) -> Rect {
		if self.show_log {
			let [popup, _] =
				Layout::vertical([Constraint::Min(0), Constraint::Length(LOG_PANE_HEIGHT)])
					.areas(area);
			popup
		} else {
			area
		}
	}

	/// Run one popup frame over `events`. Returns the outcome once the
	/// picker is done.
	fn step(&mut self, events: &[Event], area: Rect) -> Option<PickOutcome<T>> {
		let input = FrameInput::from_events(events, self.pointer);
		self.pointer = input.snapshot.pointer;
		if input.abort {
			info!("picker aborted");
			return Some(self.outcome(false, None));
		}
		let confirmed = input.submitted;
		let clicked = input.snapshot.clicked;

		self.surface.begin_frame(self.popup_area(area), input);
		let frame = self.popup.show(
			&mut self.session,
			&mut self.surface,
			self.token,
			self.items.iter().cloned(),
			&mut self.search,
			&mut self.delegate,
			|| debug!("picker popup closed"),
		);
		self.token = frame.token;

		if let Some(reason) = frame.closed {
			info!("picker dismissed ({reason:?})");
			return Some(self.outcome(false, Some(reason)));
		}
		if clicked && frame.selected.is_some() {
			return Some(self.outcome(true, None));
		}
		if confirmed {
			let accepted = frame.selected.is_some() || self.confirm_active_row();
			return Some(self.outcome(accepted, None));
		}
		None
	}

	/// Accept the row drawn as active when Enter is pressed without a search
	/// bar. With a search bar the popup's own submission picks the row.
	fn confirm_active_row(&mut self) -> bool {
		if self.popup.flags().contains(PopupFlags::SEARCH_BAR) {
			return false;
		}
		let Some(item) = self.items.get(self.session.selected_key()) else {
			return false;
		};
		self.delegate.on_select(item);
		true
	}

	fn draw(&mut self, frame: &mut Frame<'_>) {
		if self.show_log {
			let [_, log_area] =
				Layout::vertical([Constraint::Min(0), Constraint::Length(LOG_PANE_HEIGHT)])
					.areas(frame.area());
			let widget = TuiLoggerWidget::default()
				.block(Block::bordered().title(" Log ").border_style(self.theme.border))
				.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
				.output_target(false)
				.output_file(false)
				.output_line(false)
				.style_error(Style::new().fg(Color::Red))
				.style_warn(Style::new().fg(Color::Yellow))
				.style_info(self.theme.prompt)
				.style_debug(self.theme.empty)
				.style_trace(self.theme.empty);
			frame.render_widget(widget, log_area);
		}
		self.surface.render(frame, &self.theme);
	}

	fn outcome(&self, accepted: bool, closed: Option<CloseReason>) -> PickOutcome<T> {
		PickOutcome {
			accepted,
			query: self.search.clone(),
			selection: self.delegate.selected().cloned(),
			closed,
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::{KeyCode, MouseButton, MouseEventKind};

	use super::*;
	use crate::input::tests::{ctrl, key, mouse};

	const BONES: [&str; 4] = ["j_kosi_l", "j_sebo_a", "n_root", "j_kosi_r"];

	struct Harness {
		popup: HoverPopup,
		terminal: Terminal<TestBackend>,
	}

	impl Harness {
		fn new(flags: PopupFlags) -> Self {
			Self {
				popup: HoverPopup::new(flags).with_min_width(0.0),
				terminal: Terminal::new(TestBackend::new(40, 16)).unwrap(),
			}
		}

		/// Feed one batch of events per frame, drawing in between.
		fn play(&mut self, frames: &[Vec<Event>]) -> Option<PickOutcome<&'static str>> {
			let mut picker = Picker::new(BONES.to_vec(), &self.popup, RunOptions::default());
			let area = Rect::new(0, 0, 40, 16);
			for events in frames {
				if let Some(outcome) = picker.step(events, area) {
					return Some(outcome);
				}
				self.terminal.draw(|frame| picker.draw(frame)).unwrap();
			}
			None
		}
	}

	#[test]
	fn idle_frames_keep_running() {
		let mut harness = Harness::new(PopupFlags::SEARCH_BAR);
		assert_eq!(harness.play(&[vec![], vec![], vec![]]), None);
	}

	#[test]
	fn enter_takes_the_best_match() {
		let mut harness = Harness::new(PopupFlags::SEARCH_BAR);
		let typing: Vec<Event> = "root".chars().map(|ch| key(KeyCode::Char(ch))).collect();

		let outcome = harness.play(&[vec![], typing, vec![key(KeyCode::Enter)]]);

		assert_eq!(
			outcome,
			Some(PickOutcome {
				accepted: true,
				query: "root".into(),
				selection: Some("n_root"),
				closed: None,
			})
		);
	}

	#[test]
	fn enter_without_search_bar_takes_the_active_row() {
		let mut harness = Harness::new(PopupFlags::empty());

		let outcome = harness.play(&[vec![], vec![key(KeyCode::Enter)]]);

		assert_eq!(
			outcome,
			Some(PickOutcome {
				accepted: true,
				query: String::new(),
				selection: Some("j_kosi_l"),
				closed: None,
			})
		);
	}

	#[test]
	fn enter_without_search_bar_follows_arrow_keys() {
		let mut harness = Harness::new(PopupFlags::empty());

		let outcome = harness
			.play(&[
				vec![],
				vec![key(KeyCode::Down)],
				vec![key(KeyCode::Down)],
				vec![key(KeyCode::Enter)],
			])
			.unwrap();

		assert!(outcome.accepted);
		assert_eq!(outcome.selection, Some("n_root"));
	}

	#[test]
	fn enter_with_no_matches_is_not_accepted() {
		let mut harness = Harness::new(PopupFlags::SEARCH_BAR);
		let typing: Vec<Event> = "zzz".chars().map(|ch| key(KeyCode::Char(ch))).collect();

		let outcome = harness
			.play(&[
				vec![],
				vec![key(KeyCode::Down)],
				typing,
				vec![key(KeyCode::Enter)],
			])
			.unwrap();

		assert!(!outcome.accepted);
		assert_eq!(outcome.query, "zzz");
		assert_eq!(outcome.closed, None);
	}

	#[test]
	fn escape_dismisses_with_last_highlight() {
		let mut harness = Harness::new(PopupFlags::empty());

		let outcome = harness
			.play(&[vec![], vec![key(KeyCode::Down)], vec![key(KeyCode::Esc)]])
			.unwrap();

		assert!(!outcome.accepted);
		assert_eq!(outcome.selection, Some("j_sebo_a"));
		assert_eq!(outcome.closed, Some(CloseReason::Escape));
	}

	#[test]
	fn clicking_a_row_confirms_it() {
		let mut harness = Harness::new(PopupFlags::empty());
		let click = mouse(MouseEventKind::Down(MouseButton::Left), 3, 3);

		let outcome = harness.play(&[vec![], vec![click]]).unwrap();

		assert!(outcome.accepted);
		assert_eq!(outcome.selection, Some("n_root"));
	}

	#[test]
	fn clicking_outside_closes_on_blur() {
		let mut harness = Harness::new(PopupFlags::empty());
		let click = mouse(MouseEventKind::Down(MouseButton::Left), 30, 12);

		let outcome = harness.play(&[vec![], vec![click]]).unwrap();

		assert_eq!(outcome.closed, Some(CloseReason::FocusLost));
		assert!(!outcome.accepted);
	}

	#[test]
	fn ctrl_c_aborts() {
		let mut harness = Harness::new(PopupFlags::SEARCH_BAR);
		let outcome = harness.play(&[vec![], vec![ctrl('c')]]).unwrap();
		assert!(!outcome.accepted);
		assert_eq!(outcome.closed, None);
		assert_eq!(outcome.selection, None);
	}

	#[test]
	fn log_pane_is_drawn_below_the_popup() {
		let popup = HoverPopup::new(PopupFlags::empty()).with_min_width(0.0);
		let options = RunOptions {
			show_log: true,
			..RunOptions::default()
		};
		let mut picker = Picker::new(BONES.to_vec(), &popup, options);
		let mut terminal = Terminal::new(TestBackend::new(40, 16)).unwrap();

		assert_eq!(picker.step(&[], Rect::new(0, 0, 40, 16)), None);
		terminal.draw(|frame| picker.draw(frame)).unwrap();

		let buffer = terminal.backend().buffer();
		let log_title: String = (0..40u16)
			.map(|x| buffer[(x, 16 - LOG_PANE_HEIGHT)].symbol())
			.collect();
		assert!(log_title.contains("Log"));
	}

	#[test]
	fn log_pane_reserves_the_bottom_rows() {
		let popup = HoverPopup::default();
		let options = RunOptions {
			show_log: true,
			..RunOptions::default()
		};
		let picker = Picker::new(BONES.to_vec(), &popup, options);
		assert_eq!(
			picker.popup_area(Rect::new(0, 0, 40, 16)),
			Rect::new(0, 0, 40, 16 - LOG_PANE_HEIGHT)
		);
	}
}
