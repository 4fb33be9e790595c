use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::input::{InputSnapshot, NavKeys, Point};

type Log = Rc<RefCell<Vec<String>>>;

const BONES: [&str; 5] = ["j_kosi_l", "j_sebo_a", "n_root", "j_ude_a_l", "j_kosi_r"];

#[derive(Default)]
struct FakeSurface {
	input: InputSnapshot,
	window_blurred: bool,
	submit: bool,
	windows: Vec<(Option<Point>, bool)>,
	scrolls: usize,
	blank_headers: usize,
	keyboard: Option<KeyboardTarget>,
	searched: usize,
}

impl PopupSurface for FakeSurface {
	fn input(&self) -> InputSnapshot {
		self.input
	}

	fn begin_window(&mut self, window: &WindowSpec<'_>) -> bool {
		self.windows.push((window.position, window.decorated));
		true
	}

	fn end_window(&mut self) {}

	fn window_focused(&self) -> bool {
		!self.window_blurred
	}

	fn search_bar(&mut self, _bar: &SearchBarSpec<'_>, _text: &mut String) -> bool {
		self.searched += 1;
		self.submit
	}

	fn begin_list(&mut self, _label: &str) {}

	fn end_list(&mut self) {}

	fn blank_header(&mut self) {
		self.blank_headers += 1;
	}

	fn item_focused(&self) -> bool {
		false
	}

	fn item_active(&self) -> bool {
		false
	}

	fn scroll_to_current_row(&mut self) {
		self.scrolls += 1;
	}

	fn request_keyboard_focus(&mut self, target: KeyboardTarget) {
		self.keyboard = Some(target);
	}
}

#[derive(Default)]
struct Recorder {
	log: Log,
	clicked: Vec<&'static str>,
	focus_rows: bool,
	selected: Vec<&'static str>,
	actives: Vec<&'static str>,
	headers: Vec<&'static str>,
	filter_calls: usize,
}

impl PopupDelegate<&'static str, FakeSurface> for Recorder {
	fn filter(&mut self, items: Vec<&'static str>, query: &str) -> Vec<&'static str> {
		self.filter_calls += 1;
		items.into_iter().filter(|item| item.contains(query)).collect()
	}

	fn header(&mut self, _surface: &mut FakeSurface, item: &&'static str) {
		self.headers.push(*item);
	}

	fn draw_row(&mut self, _surface: &mut FakeSurface, item: &&'static str, active: bool) -> RowReport {
		self.log.borrow_mut().push(format!("row {item}"));
		if active {
			self.actives.push(*item);
		}
		RowReport {
			selected: self.clicked.contains(item),
			focused: self.focus_rows,
		}
	}

	fn on_select(&mut self, item: &&'static str) {
		self.selected.push(*item);
	}
}

struct Harness {
	popup: HoverPopup,
	session: PopupSession<&'static str>,
	surface: FakeSurface,
	delegate: Recorder,
	search: String,
	token: Option<SessionToken>,
	log: Log,
}

impl Harness {
	fn new(flags: PopupFlags) -> Self {
		let log = Log::default();
		Self {
			popup: HoverPopup::new(flags),
			session: PopupSession::new(),
			surface: FakeSurface::default(),
			delegate: Recorder {
				log: Rc::clone(&log),
				..Recorder::default()
			},
			search: String::new(),
			token: None,
			log,
		}
	}

	fn grid(columns: usize) -> Self {
		let mut harness = Self::new(PopupFlags::GRID);
		harness.popup = harness.popup.clone().with_columns(columns).unwrap();
		harness
	}

	fn frame(&mut self, items: &[&'static str]) -> PopupFrame {
		self.frame_as("popup", items)
	}

	fn frame_as(&mut self, name: &'static str, items: &[&'static str]) -> PopupFrame {
		let log = Rc::clone(&self.log);
		let frame = self.popup.show(
			&mut self.session,
			&mut self.surface,
			self.token,
			items.iter().copied(),
			&mut self.search,
			&mut self.delegate,
			move || log.borrow_mut().push(format!("close {name}")),
		);
		self.token = frame.token;
		frame
	}

	fn press(&mut self, keys: NavKeys, items: &[&'static str]) -> PopupFrame {
		self.surface.input = InputSnapshot::default().with_pressed(keys);
		let frame = self.frame(items);
		self.surface.input = InputSnapshot::default();
		frame
	}

	fn closes(&self) -> usize {
		self.log
			.borrow()
			.iter()
			.filter(|entry| entry.starts_with("close"))
			.count()
	}
}

fn numbered(count: usize) -> Vec<&'static str> {
	(0..count)
		.map(|n| &*Box::leak(format!("item{n:02}").into_boxed_str()))
		.collect()
}

#[test]
fn at_most_one_selection_per_frame() {
	let mut harness = Harness::new(PopupFlags::SEARCH_BAR);
	harness.delegate.clicked = BONES.to_vec();
	harness.surface.submit = true;

	let frame = harness.press(NavKeys::DOWN, &BONES);

	assert_eq!(harness.delegate.selected, vec!["j_kosi_l"]);
	assert_eq!(frame.selected, Some(0));
}

#[test]
fn same_token_keeps_popup_open() {
	let mut harness = Harness::new(PopupFlags::empty());
	let first = harness.frame(&BONES).token;
	for _ in 0..5 {
		let frame = harness.frame(&BONES);
		assert!(frame.is_open());
		assert_eq!(frame.token, first);
	}
	assert_eq!(harness.closes(), 0);
}

#[test]
fn new_invocation_closes_previous_before_rows() {
	let mut harness = Harness::new(PopupFlags::empty());
	harness.frame_as("bones", &BONES);
	harness.log.borrow_mut().clear();

	harness.token = None;
	let frame = harness.frame_as("items", &["sword", "shield"]);

	let log = harness.log.borrow();
	assert_eq!(log.first().map(String::as_str), Some("close bones"));
	assert_eq!(log.iter().filter(|e| *e == "close bones").count(), 1);
	assert_eq!(log[1], "row sword");
	assert!(frame.is_open());
	assert!(!log.iter().any(|e| e == "close items"));
}

#[test]
fn list_up_from_top_changes_nothing() {
	let mut harness = Harness::new(PopupFlags::empty());
	let frame = harness.press(NavKeys::UP, &BONES[..3]);
	assert_eq!(frame.selected, None);
	assert_eq!(harness.session.selected_key(), 0);
}

#[test]
fn list_down_from_bottom_changes_nothing() {
	let mut harness = Harness::new(PopupFlags::empty());
	let items = &BONES[..3];
	harness.press(NavKeys::DOWN, items);
	harness.press(NavKeys::DOWN, items);
	assert_eq!(harness.session.selected_key(), 2);

	let frame = harness.press(NavKeys::DOWN, items);
	assert_eq!(frame.selected, None);
	assert_eq!(harness.session.selected_key(), 2);
}

#[test]
fn grid_moves_right_but_not_into_missing_cell() {
	let items = numbered(7);
	let mut harness = Harness::grid(3);
	harness.press(NavKeys::DOWN, &items);
	harness.press(NavKeys::RIGHT, &items);
	assert_eq!(harness.session.selected_key(), 4);

	let down = harness.press(NavKeys::DOWN, &items);
	assert_eq!(down.selected, None);
	assert_eq!(harness.session.selected_key(), 4);

	let right = harness.press(NavKeys::RIGHT, &items);
	assert_eq!(right.selected, Some(5));
}

#[test]
fn filter_is_skipped_without_search_bar() {
	let mut harness = Harness::new(PopupFlags::HEADER);
	harness.search = "kosi".into();

	harness.frame(&BONES);

	assert_eq!(harness.delegate.filter_calls, 0);
	assert_eq!(harness.surface.searched, 0);
	let rows = harness.log.borrow().iter().filter(|e| e.starts_with("row")).count();
	assert_eq!(rows, BONES.len());
}

#[test]
fn filter_runs_with_search_text() {
	let mut harness = Harness::new(PopupFlags::SEARCH_BAR);
	harness.search = "kosi".into();

	harness.frame(&BONES);

	assert_eq!(harness.delegate.filter_calls, 1);
	let rows: Vec<String> = harness.log.borrow().clone();
	assert_eq!(rows, vec!["row j_kosi_l", "row j_kosi_r"]);
}

#[test]
fn page_down_jumps_eight_rows() {
	let items = numbered(20);
	let mut harness = Harness::new(PopupFlags::empty());
	harness.press(NavKeys::DOWN, &items);
	harness.press(NavKeys::DOWN, &items);

	let frame = harness.press(NavKeys::PAGE_DOWN, &items);

	assert_eq!(frame.selected, Some(10));
	assert_eq!(harness.delegate.selected.last(), Some(&"item10"));
}

#[test]
fn escape_closes_and_clears_session() {
	let mut harness = Harness::new(PopupFlags::STAY_ON_BLUR);
	harness.press(NavKeys::DOWN, &BONES);

	let frame = harness.press(NavKeys::ESCAPE, &BONES);

	assert_eq!(frame.closed, Some(CloseReason::Escape));
	assert_eq!(frame.token, None);
	assert_eq!(harness.closes(), 1);
	assert!(!harness.session.is_open());
	assert_eq!(harness.session.anchor(), None);
	assert_eq!(harness.session.selected_key(), 0);
}

#[test]
fn losing_focus_closes() {
	let mut harness = Harness::new(PopupFlags::empty());
	harness.frame(&BONES);
	harness.surface.window_blurred = true;

	let frame = harness.frame(&BONES);

	assert_eq!(frame.closed, Some(CloseReason::FocusLost));
	assert_eq!(harness.closes(), 1);
}

#[test]
fn stay_on_blur_keeps_unfocused_popup() {
	let mut harness = Harness::new(PopupFlags::STAY_ON_BLUR);
	harness.surface.window_blurred = true;

	let frame = harness.frame(&BONES);

	assert!(frame.is_open());
	assert_eq!(harness.closes(), 0);
	assert!(!harness.session.has_focus());
}

#[test]
fn focused_row_keeps_unfocused_window_open() {
	let mut harness = Harness::new(PopupFlags::empty());
	harness.surface.window_blurred = true;
	harness.delegate.focus_rows = true;

	let frame = harness.frame(&BONES);

	assert!(frame.is_open());
	assert!(harness.session.has_focus());
}

#[test]
fn list_selection_is_clamped_when_results_shrink() {
	let mut harness = Harness::new(PopupFlags::SEARCH_BAR);
	for _ in 0..4 {
		harness.press(NavKeys::DOWN, &BONES);
	}
	assert_eq!(harness.session.selected_key(), 4);

	harness.search = "kosi".into();
	harness.delegate.actives.clear();
	harness.frame(&BONES);

	assert_eq!(harness.session.selected_key(), 1);
	assert_eq!(harness.delegate.actives, vec!["j_kosi_r"]);
}

#[test]
fn grid_selection_is_not_clamped_when_results_shrink() {
	let items = numbered(7);
	let mut harness = Harness::grid(3);
	harness.press(NavKeys::DOWN, &items);
	harness.press(NavKeys::RIGHT, &items);
	assert_eq!(harness.session.selected_key(), 4);

	harness.delegate.actives.clear();
	harness.frame(&items[..2]);

	assert_eq!(harness.session.selected_key(), 4);
	assert!(harness.delegate.actives.is_empty());
}

#[test]
fn submitting_search_selects_first_result() {
	let mut harness = Harness::new(PopupFlags::SEARCH_BAR);
	harness.search = "kosi".into();
	harness.surface.submit = true;

	let frame = harness.frame(&BONES);

	assert_eq!(frame.selected, Some(0));
	assert_eq!(harness.delegate.selected, vec!["j_kosi_l"]);
	assert!(harness.session.search_committed());
	assert_eq!(harness.surface.scrolls, 0);
}

#[test]
fn scrolls_only_for_keyboard_moves() {
	let mut harness = Harness::new(PopupFlags::empty());
	harness.press(NavKeys::DOWN, &BONES);
	assert_eq!(harness.surface.scrolls, 1);

	harness.delegate.clicked = vec!["n_root"];
	let frame = harness.frame(&BONES);
	assert_eq!(frame.selected, Some(2));
	assert_eq!(harness.surface.scrolls, 1);
}

#[test]
fn header_shows_last_selection() {
	let mut harness = Harness::new(PopupFlags::HEADER);
	harness.frame(&BONES);
	assert_eq!(harness.surface.blank_headers, 1);
	assert!(harness.delegate.headers.is_empty());

	harness.press(NavKeys::DOWN, &BONES);
	harness.frame(&BONES);
	assert_eq!(harness.delegate.headers, vec!["j_sebo_a"]);
	assert_eq!(harness.session.header_item(), Some(&"j_sebo_a"));
}

#[test]
fn fixed_window_is_pinned_every_frame() {
	let mut harness = Harness::new(PopupFlags::empty());
	harness.surface.input = InputSnapshot::at(Point::new(12.0, 7.0));
	harness.frame(&BONES);
	harness.surface.input = InputSnapshot::at(Point::new(40.0, 2.0));
	harness.frame(&BONES);

	let anchor = Some(Point::new(12.0, 7.0));
	assert_eq!(harness.surface.windows, vec![(anchor, false), (anchor, false)]);
}

#[test]
fn grabbable_window_is_pinned_only_when_opened() {
	let mut harness = Harness::new(PopupFlags::GRABBABLE);
	harness.surface.input = InputSnapshot::at(Point::new(3.0, 4.0));
	harness.frame(&BONES);
	harness.frame(&BONES);

	assert_eq!(
		harness.surface.windows,
		vec![(Some(Point::new(3.0, 4.0)), true), (None, true)]
	);
	assert_eq!(harness.session.anchor(), Some(Point::new(3.0, 4.0)));
}

#[test]
fn keyboard_focus_goes_to_search_bar_or_rows() {
	let mut with_search = Harness::new(PopupFlags::SEARCH_BAR);
	with_search.frame(&BONES);
	assert_eq!(with_search.surface.keyboard, Some(KeyboardTarget::SearchBar));

	let mut without = Harness::new(PopupFlags::empty());
	without.frame(&BONES);
	assert_eq!(without.surface.keyboard, Some(KeyboardTarget::FirstRow));
}

#[test]
fn empty_items_never_select() {
	let mut harness = Harness::new(PopupFlags::HEADER | PopupFlags::SEARCH_BAR);
	harness.surface.submit = true;

	let frame = harness.press(NavKeys::DOWN | NavKeys::PAGE_DOWN, &[]);

	assert_eq!(frame.selected, None);
	assert!(harness.delegate.selected.is_empty());
	assert_eq!(harness.surface.blank_headers, 1);
}

#[test]
fn columns_are_validated() {
	assert_eq!(
		HoverPopup::default().with_columns(0),
		Err(PopupError::ZeroColumns)
	);
	assert_eq!(
		HoverPopup::default().with_search_limit(0),
		Err(PopupError::ZeroSearchLimit)
	);
	assert_eq!(HoverPopup::default().columns(), DEFAULT_COLUMNS);
}

#[test]
fn session_tracks_columns_every_call() {
	let mut harness = Harness::grid(4);
	harness.frame(&BONES);
	assert_eq!(harness.session.columns().get(), 4);
}

#[derive(Default)]
struct RowsOnly {
	drawn: Vec<&'static str>,
	selected: Vec<&'static str>,
}

impl PopupDelegate<&'static str, FakeSurface> for RowsOnly {
	fn draw_row(&mut self, _surface: &mut FakeSurface, item: &&'static str, _active: bool) -> RowReport {
		self.drawn.push(*item);
		RowReport::default()
	}

	fn on_select(&mut self, item: &&'static str) {
		self.selected.push(*item);
	}
}

#[test]
fn default_delegate_methods_pass_items_through() {
	let popup = HoverPopup::new(PopupFlags::SEARCH_BAR | PopupFlags::HEADER);
	let mut session = PopupSession::new();
	let mut surface = FakeSurface::default();
	let mut delegate = RowsOnly::default();
	let mut search = String::from("kosi");

	let first = popup.show(&mut session, &mut surface, None, BONES, &mut search, &mut delegate, || {});
	surface.input = InputSnapshot::default().with_pressed(NavKeys::DOWN);
	popup.show(&mut session, &mut surface, first.token, BONES, &mut search, &mut delegate, || {});
	surface.input = InputSnapshot::default();
	delegate.drawn.clear();
	popup.show(&mut session, &mut surface, first.token, BONES, &mut search, &mut delegate, || {});

	assert_eq!(delegate.drawn, BONES.to_vec());
	assert_eq!(delegate.selected, vec!["j_sebo_a"]);
	assert_eq!(session.header_item(), Some(&"j_sebo_a"));
	assert_eq!(surface.blank_headers, 2);
}
