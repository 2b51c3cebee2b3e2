// src/app/mod.rs

//! The dashboard controller: one `App` owns every component's state and is
//! the only thing the event loop mutates.

pub mod clock;
pub mod navigation;
pub mod records;
pub mod result;
pub mod scan;
pub mod weather;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::dispatch::{AppEvent, Request};
use crate::keys::Action;

use self::clock::ClockTicker;
use self::navigation::{Navigator, Panel};
use self::records::RecordTable;
use self::result::ResultDisplay;
use self::scan::{ScanForm, SubmitOutcome};
use self::weather::WeatherWidget;

/// Text input that receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Url,
    Text,
    Weather,
}

impl Field {
    /// Fields reachable with Tab while `panel` is showing. The weather input
    /// sits in the sidebar and is always reachable.
    fn cycle_for(panel: Panel) -> &'static [Field] {
        match panel {
            Panel::Scan => &[Field::Url, Field::Text, Field::Weather],
            Panel::Database | Panel::About => &[Field::Weather],
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub focus: Field,
    pub navigator: Navigator,
    pub scan: ScanForm,
    pub result: ResultDisplay,
    pub records: RecordTable,
    pub weather: WeatherWidget,
    pub clock: ClockTicker,
}

impl App {
    pub fn new(default_location: &str, now: NaiveDateTime) -> Self {
        Self {
            should_quit: false,
            focus: Field::Url,
            navigator: Navigator::new(),
            scan: ScanForm::default(),
            result: ResultDisplay::default(),
            records: RecordTable::default(),
            weather: WeatherWidget::new(default_location),
            clock: ClockTicker::start(now),
        }
    }

    /// Requests issued once when the dashboard comes up: the record list and
    /// the weather for the default location.
    pub fn startup(&mut self) -> Vec<Request> {
        vec![self.records.load(), self.weather.fetch_from_input()]
    }

    pub fn active_panel(&self) -> Panel {
        self.navigator.active()
    }

    pub fn navigate(&mut self, target: Panel) -> Option<Request> {
        let entered_database = self.navigator.navigate(target);
        info!(panel = %target, "Switched panel.");
        self.focus = Field::cycle_for(target)[0];
        entered_database.then(|| self.records.load())
    }

    pub fn submit_scan(&mut self) -> Option<Request> {
        match self.scan.submit(&mut self.result) {
            SubmitOutcome::Issued(request) => Some(request),
            SubmitOutcome::Rejected | SubmitOutcome::Busy => None,
        }
    }

    pub fn fetch_weather(&mut self) -> Request {
        self.weather.fetch_from_input()
    }

    pub fn handle_action(&mut self, action: Action) -> Option<Request> {
        if self.records.is_confirming_clear() {
            return self.handle_dialog_action(action);
        }

        match action {
            Action::Quit | Action::Cancel => {
                self.quit();
                None
            }
            Action::Navigate(panel) => self.navigate(panel),
            Action::NextField => {
                self.cycle_focus(1);
                None
            }
            Action::PrevField => {
                self.cycle_focus(-1);
                None
            }
            Action::Submit => match self.focus {
                Field::Url | Field::Text => self.submit_scan(),
                Field::Weather => Some(self.fetch_weather()),
            },
            Action::Input(c) => {
                if let Some(field) = self.focused_input_mut() {
                    field.push(c);
                }
                None
            }
            Action::Backspace => {
                if let Some(field) = self.focused_input_mut() {
                    field.pop();
                }
                None
            }
            Action::Refresh if self.active_panel() == Panel::Database => {
                Some(self.records.refresh())
            }
            Action::Clear if self.active_panel() == Panel::Database => {
                self.records.clear();
                None
            }
            Action::MoveUp => {
                match self.active_panel() {
                    Panel::Database => self.records.select_previous(),
                    Panel::Scan => self.result.scroll_up(),
                    Panel::About => {}
                }
                None
            }
            Action::MoveDown => {
                match self.active_panel() {
                    Panel::Database => self.records.select_next(),
                    Panel::Scan => self.result.scroll_down(),
                    Panel::About => {}
                }
                None
            }
            Action::Refresh | Action::Clear => {
                debug!(?action, "Ignored outside the Database panel.");
                None
            }
        }
    }

    fn handle_dialog_action(&mut self, action: Action) -> Option<Request> {
        match action {
            Action::Submit | Action::Input('y' | 'Y') => self.records.confirm_clear(),
            Action::Cancel | Action::Input('n' | 'N') => {
                self.records.cancel_clear();
                None
            }
            Action::Quit => {
                self.quit();
                None
            }
            _ => None,
        }
    }

    /// Routes a settle to the component that issued the request.
    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ScanSettled { token, result } => {
                self.scan.settle(token, result, &mut self.result)
            }
            AppEvent::RecordsSettled {
                token,
                purpose,
                result,
            } => self.records.settle(token, purpose, result),
            AppEvent::WeatherSettled { token, result } => self.weather.settle(token, result),
        }
    }

    pub fn on_tick(&mut self, now: NaiveDateTime) {
        self.clock.tick(now);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn cycle_focus(&mut self, step: isize) {
        let fields = Field::cycle_for(self.active_panel());
        let len = fields.len() as isize;
        let current = fields.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        self.focus = fields[(current + step).rem_euclid(len) as usize];
    }

    // The scan fields are locked while a scan is in flight.
    fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Url if !self.scan.is_busy() => Some(&mut self.scan.url_input),
            Field::Text if !self.scan.is_busy() => Some(&mut self.scan.text_input),
            Field::Weather => Some(&mut self.weather.input),
            Field::Url | Field::Text => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn app() -> App {
        let now = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        App::new("London", now)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_action(Action::Input(c));
        }
    }

    #[test]
    fn startup_loads_records_and_default_weather() {
        let mut app = app();
        let requests = app.startup();
        assert_eq!(requests.len(), 2);
        assert!(matches!(requests[0], Request::Records { .. }));
        assert!(matches!(&requests[1], Request::Weather { location, .. } if location == "London"));
    }

    #[test]
    fn tab_cycles_fields_of_the_visible_panel() {
        let mut app = app();
        assert_eq!(app.focus, Field::Url);
        app.handle_action(Action::NextField);
        assert_eq!(app.focus, Field::Text);
        app.handle_action(Action::NextField);
        assert_eq!(app.focus, Field::Weather);
        app.handle_action(Action::NextField);
        assert_eq!(app.focus, Field::Url);
        app.handle_action(Action::PrevField);
        assert_eq!(app.focus, Field::Weather);

        app.handle_action(Action::Navigate(Panel::About));
        app.handle_action(Action::NextField);
        assert_eq!(app.focus, Field::Weather);
    }

    #[test]
    fn enter_in_weather_field_fetches_typed_location() {
        let mut app = app();
        app.focus = Field::Weather;
        type_str(&mut app, "Berlinx");
        app.handle_action(Action::Backspace);

        let request = app.handle_action(Action::Submit);
        assert!(matches!(request, Some(Request::Weather { ref location, .. }) if location == "Berlin"));
    }

    #[test]
    fn scan_fields_are_locked_while_busy() {
        let mut app = app();
        type_str(&mut app, "http://x.test");
        assert!(app.handle_action(Action::Submit).is_some());

        type_str(&mut app, "zzz");
        assert_eq!(app.scan.url_input, "http://x.test");
        assert!(app.handle_action(Action::Submit).is_none());
    }

    #[test]
    fn refresh_and_clear_only_act_on_the_database_panel() {
        let mut app = app();
        assert!(app.handle_action(Action::Refresh).is_none());
        app.handle_action(Action::Clear);
        assert!(!app.records.is_confirming_clear());

        assert!(app.handle_action(Action::Navigate(Panel::Database)).is_some());
        assert!(matches!(app.handle_action(Action::Refresh), Some(Request::Records { .. })));
        app.handle_action(Action::Clear);
        assert!(app.records.is_confirming_clear());
    }

    #[test]
    fn dialog_swallows_keys_until_answered() {
        let mut app = app();
        app.navigate(Panel::Database);
        app.handle_action(Action::Clear);

        assert!(app.handle_action(Action::Navigate(Panel::Scan)).is_none());
        assert_eq!(app.active_panel(), Panel::Database);
        app.handle_action(Action::Cancel);
        assert!(!app.should_quit);
        assert!(!app.records.is_confirming_clear());

        app.handle_action(Action::Clear);
        assert!(app.handle_action(Action::Input('y')).is_some());
        assert!(!app.records.is_confirming_clear());
    }

    #[test]
    fn escape_quits_when_no_dialog_is_open() {
        let mut app = app();
        app.handle_action(Action::Cancel);
        assert!(app.should_quit);
    }
}
