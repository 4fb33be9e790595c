//! Translation of crossterm events into one frame of popup input.

use hoverpick_popup::{InputSnapshot, NavKeys, Point};
use ratatui::crossterm::event::{
	Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// A change to the search buffer, applied in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEdit {
	Insert(char),
	Backspace,
	Clear,
}

/// Everything the terminal reported between two frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
	pub snapshot: InputSnapshot,
	pub edits: Vec<SearchEdit>,
	/// Enter was pressed.
	pub submitted: bool,
	/// Last pointer position while the left button was held down.
	pub dragged_to: Option<Point>,
	pub released: bool,
	/// Ctrl-C was pressed.
	pub abort: bool,
}

impl FrameInput {
	/// Fold `events` into a single frame, starting from the pointer position
	/// of the previous frame.
	#[must_use]
	pub fn from_events(events: &[Event], pointer: Point) -> Self {
		let mut input = Self {
			snapshot: InputSnapshot::at(pointer),
			..Self::default()
		};
		for event in events {
			match event {
				Event::Key(key) if key.kind == KeyEventKind::Press => input.push_key(*key),
				Event::Mouse(mouse) => input.push_mouse(*mouse),
				Event::Paste(text) => input.edits.extend(
					text.chars()
						.filter(|ch| !ch.is_control())
						.map(SearchEdit::Insert),
				),
				_ => {}
			}
		}
		input
	}

	fn push_key(&mut self, key: KeyEvent) {
		let control = key.modifiers.contains(KeyModifiers::CONTROL);
		let pressed = match key.code {
			KeyCode::Up => NavKeys::UP,
			KeyCode::Down => NavKeys::DOWN,
			KeyCode::Left => NavKeys::LEFT,
			KeyCode::Right => NavKeys::RIGHT,
			KeyCode::PageUp => NavKeys::PAGE_UP,
			KeyCode::PageDown => NavKeys::PAGE_DOWN,
			KeyCode::Esc => NavKeys::ESCAPE,
			KeyCode::Enter => {
				self.submitted = true;
				return;
			}
			KeyCode::Backspace => {
				self.edits.push(SearchEdit::Backspace);
				return;
			}
			KeyCode::Char('c') if control => {
				self.abort = true;
				return;
			}
			KeyCode::Char('u') if control => {
				self.edits.push(SearchEdit::Clear);
				return;
			}
			KeyCode::Char(ch) if !control && !key.modifiers.contains(KeyModifiers::ALT) => {
				self.edits.push(SearchEdit::Insert(ch));
				return;
			}
			_ => return,
		};
		self.snapshot.pressed |= pressed;
	}

	fn push_mouse(&mut self, mouse: MouseEvent) {
		let position = Point::new(f32::from(mouse.column), f32::from(mouse.row));
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				self.snapshot.pointer = position;
				self.snapshot.clicked = true;
			}
			MouseEventKind::Drag(MouseButton::Left) => {
				self.snapshot.pointer = position;
				self.dragged_to = Some(position);
			}
			MouseEventKind::Up(MouseButton::Left) => {
				self.snapshot.pointer = position;
				self.released = true;
			}
			MouseEventKind::Moved => self.snapshot.pointer = position,
			MouseEventKind::ScrollUp => self.snapshot.pressed |= NavKeys::UP,
			MouseEventKind::ScrollDown => self.snapshot.pressed |= NavKeys::DOWN,
			_ => {}
		}
	}
}
