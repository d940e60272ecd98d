//! Application state and core logic

use crate::state::{
    login_summary, with_char, without_last_char, AppState, LoginForm, MemoField, Notice, Panel,
    ProfileAction, ProfileField, ThemeStore,
};
use crate::users::UserSource;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// State of every panel
    pub state: AppState,
    /// Theme shared by all panels
    pub theme: ThemeStore,
    /// Where the users panel reads from
    users_source: Arc<dyn UserSource>,
    notice_tx: mpsc::UnboundedSender<Notice>,
    notice_rx: mpsc::UnboundedReceiver<Notice>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(users_source: Arc<dyn UserSource>) -> Self {
        let (notice_tx, notice_rx) = mpsc::unbounded_channel();

        let login_tx = notice_tx.clone();
        let login = LoginForm::new(Box::new(move |values| {
            let _ = login_tx.send(Notice::new(login_summary(&values)));
        }));

        Self {
            state: AppState::new(login),
            theme: ThemeStore::new(),
            users_source,
            notice_tx,
            notice_rx,
            quit: false,
        }
    }

    /// Start the users fetch. Only the first call has any effect.
    pub fn activate(&mut self) {
        if self.state.users.activate(Arc::clone(&self.users_source)) {
            tracing::info!("Fetching users");
        }
    }

    /// Pick up async results: the users fetch and submit notices
    pub fn tick(&mut self) {
        self.state.users.poll();

        while let Ok(notice) = self.notice_rx.try_recv() {
            tracing::debug!("Notice: {}", notice.message);
            self.state.last_notice = Some(notice);
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn post_notice(&self, message: String) {
        let _ = self.notice_tx.send(Notice::new(message));
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('t') if ctrl => {
                self.theme.toggle();
                return Ok(());
            }
            KeyCode::Tab => {
                self.state.focus_next();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.state.focus_prev();
                return Ok(());
            }
            _ => {}
        }

        match self.state.focused_panel {
            Panel::Counter => self.handle_counter_key(key),
            Panel::Users => self.handle_users_key(key),
            Panel::ThemedBox => self.handle_themed_box_key(key),
            Panel::Profile => self.handle_profile_key(key),
            Panel::Memo => self.handle_memo_key(key),
            Panel::Login => self.handle_login_key(key)?,
        }
        Ok(())
    }

    fn handle_counter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('+') | KeyCode::Char(' ') | KeyCode::Enter => {
                self.state.counter.increment()
            }
            KeyCode::Char('r') => self.state.counter.reset(),
            _ => {}
        }
    }

    fn handle_users_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.users.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.state.users.select_prev(),
            _ => {}
        }
    }

    fn handle_themed_box_key(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Char('t') | KeyCode::Char(' ')
        ) {
            self.theme.toggle();
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let form = self.state.profile.state();
        let current = match self.state.profile_field {
            ProfileField::Name => form.name.as_str(),
            ProfileField::Email => form.email.as_str(),
        };

        let next_value = match key.code {
            KeyCode::Up | KeyCode::Down => {
                self.state.profile_field = self.state.profile_field.toggle();
                return;
            }
            KeyCode::Enter => {
                self.post_notice(self.state.profile.summary());
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.state.profile.dispatch(ProfileAction::Reset);
                return;
            }
            KeyCode::Backspace => without_last_char(current),
            KeyCode::Char(c) if !ctrl => with_char(current, c),
            _ => return,
        };

        let action = match self.state.profile_field {
            ProfileField::Name => ProfileAction::SetName(next_value),
            ProfileField::Email => ProfileAction::SetEmail(next_value),
        };
        self.state.profile.dispatch(action);
    }

    fn handle_memo_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let memo = &mut self.state.memo;

        match (memo.active_field, key.code) {
            (_, KeyCode::Up | KeyCode::Down) => memo.active_field = memo.active_field.toggle(),
            (MemoField::Number, KeyCode::Char(c)) if c.is_ascii_digit() => memo.push_digit(c),
            (MemoField::Number, KeyCode::Char('+')) => memo.step(1),
            (MemoField::Number, KeyCode::Char('-')) => memo.step(-1),
            (MemoField::Number, KeyCode::Backspace) => memo.pop_digit(),
            (MemoField::Text, KeyCode::Char(c)) if !ctrl => {
                let text = with_char(memo.text(), c);
                memo.set_text(text);
            }
            (MemoField::Text, KeyCode::Backspace) => {
                let text = without_last_char(memo.text());
                memo.set_text(text);
            }
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let login = &mut self.state.login;

        match key.code {
            KeyCode::Down => login.next_field(),
            KeyCode::Up => login.prev_field(),
            KeyCode::Enter => {
                let event = login.submit();
                if !event.is_default_prevented() {
                    self.state.focus_next();
                }
            }
            KeyCode::Backspace => login.pop_char()?,
            KeyCode::Char(c) if !ctrl => login.push_char(c)?,
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FetchStatus, ProfileForm, ThemeMode};
    use crate::users::{MockUserSource, User};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn test_app() -> App {
        App::new(Arc::new(MockUserSource::new()))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn focus(app: &mut App, panel: Panel) {
        while app.state.focused_panel != panel {
            app.handle_key(key(KeyCode::Tab)).unwrap();
        }
    }

    mod global_key_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_esc_quits() {
            let mut app = test_app();
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_ctrl_c_quits() {
            let mut app = test_app();
            app.handle_key(ctrl('c')).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_tab_cycles_focus() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert_eq!(app.state.focused_panel, Panel::Users);
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            app.handle_key(key(KeyCode::BackTab)).unwrap();
            assert_eq!(app.state.focused_panel, Panel::Login);
        }

        #[test]
        fn test_ctrl_t_toggles_theme_from_any_panel() {
            let mut app = test_app();
            focus(&mut app, Panel::Login);
            app.handle_key(ctrl('t')).unwrap();
            assert_eq!(app.theme.mode(), ThemeMode::Dark);
            assert_eq!(app.state.login.binding().value("username"), Some(""));
        }
    }

    mod panel_key_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_counter_add_and_reset() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.handle_key(key(KeyCode::Char('+'))).unwrap();
            assert_eq!(app.state.counter.count(), 2);
            app.handle_key(key(KeyCode::Char('r'))).unwrap();
            assert_eq!(app.state.counter.count(), 0);
        }

        #[test]
        fn test_counter_ignores_unbound_keys() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('+'))).unwrap();
            app.handle_key(key(KeyCode::Char('0'))).unwrap();
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            assert_eq!(app.state.counter.count(), 1);
        }

        #[test]
        fn test_themed_box_toggles() {
            let mut app = test_app();
            focus(&mut app, Panel::ThemedBox);
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.theme.mode(), ThemeMode::Dark);
            app.handle_key(key(KeyCode::Char('t'))).unwrap();
            assert_eq!(app.theme.mode(), ThemeMode::Light);
        }

        #[test]
        fn test_profile_typing_submit_and_reset() {
            let mut app = test_app();
            focus(&mut app, Panel::Profile);

            type_str(&mut app, "Ann");
            app.handle_key(key(KeyCode::Down)).unwrap();
            type_str(&mut app, "a@x.comm");
            app.handle_key(key(KeyCode::Backspace)).unwrap();

            assert_eq!(
                *app.state.profile.state(),
                ProfileForm {
                    name: "Ann".to_string(),
                    email: "a@x.com".to_string(),
                }
            );

            app.handle_key(key(KeyCode::Enter)).unwrap();
            app.tick();
            let notice = app.state.last_notice.clone().unwrap();
            assert_eq!(notice.message, "Name: Ann, Email: a@x.com");

            app.handle_key(ctrl('r')).unwrap();
            assert_eq!(*app.state.profile.state(), ProfileForm::default());
        }

        #[test]
        fn test_memo_number_and_text() {
            let mut app = test_app();
            focus(&mut app, Panel::Memo);

            type_str(&mut app, "12");
            assert_eq!(app.state.memo.calculation(), 120);
            let computations = app.state.memo.computations();

            app.handle_key(key(KeyCode::Down)).unwrap();
            type_str(&mut app, "hi+");
            assert_eq!(app.state.memo.text(), "hi+");
            assert_eq!(app.state.memo.number(), 12);
            assert_eq!(app.state.memo.computations(), computations);
        }

        #[test]
        fn test_login_submit_posts_values() {
            let mut app = test_app();
            focus(&mut app, Panel::Login);

            type_str(&mut app, "bob");
            app.handle_key(key(KeyCode::Down)).unwrap();
            type_str(&mut app, "xyz");
            app.handle_key(key(KeyCode::Enter)).unwrap();

            // Submit is consumed, focus stays on the form
            assert_eq!(app.state.focused_panel, Panel::Login);

            app.tick();
            let notice = app.state.last_notice.clone().unwrap();
            assert_eq!(notice.message, "Username: bob, Password: xyz");
        }

        #[tokio::test]
        async fn test_users_selection() {
            let mut source = MockUserSource::new();
            source.expect_list_users().times(1).returning(|| {
                Ok((1..=3)
                    .map(|id| User {
                        id,
                        name: format!("User {id}"),
                        email: format!("u{id}@x.com"),
                    })
                    .collect())
            });
            let mut app = App::new(Arc::new(source));
            app.activate();
            for _ in 0..200 {
                app.tick();
                if *app.state.users.status() == FetchStatus::Loaded {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
            assert_eq!(app.state.users.users().len(), 3);

            focus(&mut app, Panel::Users);
            app.handle_key(key(KeyCode::Char('j'))).unwrap();
            app.handle_key(key(KeyCode::Down)).unwrap();
            app.handle_key(key(KeyCode::Down)).unwrap();
            assert_eq!(app.state.users.selected_index(), 2);
            app.handle_key(key(KeyCode::Up)).unwrap();
            assert_eq!(app.state.users.selected_index(), 1);
        }
    }

    #[tokio::test]
    async fn test_activate_twice_fetches_once() {
        let mut source = MockUserSource::new();
        source
            .expect_list_users()
            .times(1)
            .returning(|| Ok(Vec::new()));
        let mut app = App::new(Arc::new(source));

        app.activate();
        app.activate();
        for _ in 0..200 {
            app.tick();
            if *app.state.users.status() == FetchStatus::Loaded {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        assert_eq!(*app.state.users.status(), FetchStatus::Loaded);
    }
}
