//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to the page components.
//! It owns the slide position, the confetti overlay timer and the deferred
//! task queue that drives it.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_page_layout, CelebrationComponent, ConfettiOverlay, HelpDialog, NavBarComponent,
    PhotoComponent, QuitDialog, ReasonsComponent, VideosComponent, WelcomeComponent,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{Content, OverlayTimer, Page, Scheduler, SlideController, TimerEvent};
use crate::services;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use std::path::PathBuf;
use std::time::Instant;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Which page is showing
    pub slides: SlideController,

    /// Confetti overlay visibility
    pub overlay: OverlayTimer,

    /// Deferred overlay resets and the intro burst
    pub scheduler: Scheduler<TimerEvent>,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Error message to display
    pub error: Option<String>,

    /// Asset waiting to be opened (set by OpenMedia, handled by main loop)
    pub pending_media: Option<PathBuf>,

    /// Directory web-style asset paths resolve against
    asset_root: PathBuf,

    /// Command used to open media, if configured
    pub media_player: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub welcome: WelcomeComponent,
    pub photo: PhotoComponent,
    pub videos: VideosComponent,
    pub reasons: ReasonsComponent,
    pub celebration: CelebrationComponent,
    pub nav: NavBarComponent,
    pub confetti: ConfettiOverlay,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App instance
    pub fn new(config: &Config, content: Content, asset_root: PathBuf) -> App {
        Self::new_at(config, content, asset_root, Instant::now())
    }

    /// Create an App whose intro confetti is timed from `now`
    pub fn new_at(config: &Config, content: Content, asset_root: PathBuf, now: Instant) -> App {
        let slides = SlideController::new(Page::ALL.len());
        let mut nav = NavBarComponent::new();
        nav.sync(&slides);

        let mut scheduler = Scheduler::new();
        scheduler.schedule(now, config.intro_confetti_delay(), TimerEvent::IntroConfetti);

        App {
            slides,
            overlay: OverlayTimer::new(config.overlay_duration()),
            scheduler,
            modals: ModalStack::new(),
            should_quit: false,
            error: None,
            pending_media: None,
            asset_root,
            media_player: config.media_player.clone(),
            welcome: WelcomeComponent::new(content.welcome),
            photo: PhotoComponent::new(content.photo),
            videos: VideosComponent::new(content.videos),
            reasons: ReasonsComponent::new(content.reasons),
            celebration: CelebrationComponent::new(content.celebration),
            nav,
            confetti: ConfettiOverlay::new(config.confetti_pieces),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    pub fn current_page(&self) -> Page {
        Page::from_index(self.slides.current()).unwrap_or(Page::Welcome)
    }

    fn page_component(&mut self, page: Page) -> &mut dyn Component {
        match page {
            Page::Welcome => &mut self.welcome,
            Page::Photo => &mut self.photo,
            Page::Videos => &mut self.videos,
            Page::Reasons => &mut self.reasons,
            Page::Celebration => &mut self.celebration,
        }
    }

    /// Run every deferred task due at `now`
    pub fn tick_at(&mut self, now: Instant) {
        if self.scheduler.is_empty() {
            return;
        }
        for (handle, event) in self.scheduler.drain_due(now) {
            match event {
                TimerEvent::HideOverlay => {
                    if self.overlay.expire(handle) {
                        tracing::debug!("confetti overlay hidden");
                    }
                }
                TimerEvent::IntroConfetti => {
                    tracing::debug!("intro confetti");
                    self.trigger_at(now);
                }
            }
        }
    }

    /// Show the confetti overlay from `now`, restarting its timeout
    pub fn trigger_at(&mut self, now: Instant) {
        self.overlay.trigger(&mut self.scheduler, now);
        debug_assert!(self
            .overlay
            .pending()
            .is_some_and(|handle| self.scheduler.is_pending(handle)));
        let hide_in = self
            .overlay
            .pending()
            .and_then(|handle| self.scheduler.deadline(handle))
            .map(|deadline| deadline - now);
        tracing::debug!(?hide_in, queued = self.scheduler.len(), "confetti overlay shown");
    }

    /// Apply a slide operation and re-mount the page if it changed
    fn navigate(&mut self, op: impl FnOnce(&mut SlideController)) -> Result<()> {
        let previous = self.slides.current();
        op(&mut self.slides);
        self.nav.sync(&self.slides);
        if self.slides.current() != previous {
            let page = self.current_page();
            tracing::info!(from = previous, to = page.index(), page = page.name(), "page changed");
            self.error = None;
            self.page_component(page).init()?;
        }
        Ok(())
    }

    /// One pass of the main loop after polling: apply the event, then run
    /// whatever deferred tasks are due
    ///
    /// The tick runs whether or not an event arrived, so a steady stream of
    /// input cannot hold back the overlay reset.
    pub fn step(&mut self, event: Option<Event>, now: Instant) -> Result<()> {
        let action = match event {
            Some(Event::Key(key)) => self.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => self.handle_mouse_event(mouse)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            _ => None,
        };

        // Action might produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = self.update(a)?;
        }

        self.update(Action::Tick(now))?;
        Ok(())
    }

    fn open_media(&mut self, asset: &str) {
        let path = services::resolve_asset(&self.asset_root, asset);
        if path.exists() {
            tracing::info!(path = %path.display(), "opening media");
            self.error = None;
            self.pending_media = Some(path);
        } else {
            tracing::warn!(path = %path.display(), "asset not found");
            self.error = Some(format!("Asset not found: {}", path.display()));
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        self.welcome.init()?;
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }

        match key.code {
            KeyCode::Char('?') => return Ok(Some(Action::OpenHelp)),
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Some(Action::OpenQuitDialog)),
            _ => {}
        }

        let page = self.current_page();
        if let Some(action) = self.page_component(page).handle_key_event(key)? {
            return Ok(Some(action));
        }
        if page == Page::Welcome {
            return Ok(None);
        }
        self.nav.handle_key_event(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }
        let page = self.current_page();
        if let Some(action) = self.page_component(page).handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }
        if page == Page::Welcome {
            return Ok(None);
        }
        self.nav.handle_mouse_event(mouse)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if !matches!(action, Action::Tick(_)) {
            tracing::debug!(%action, "update");
        }

        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick(now) => self.tick_at(now),
            Action::Resize(_, _) => {}
            Action::ForceQuit => self.should_quit = true,

            // ─────────────────────────────────────────────────────────────────
            // Page Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextPage => self.navigate(SlideController::advance)?,
            Action::PrevPage => self.navigate(SlideController::retreat)?,
            Action::FirstPage => self.navigate(SlideController::go_to_first)?,
            Action::JumpToPage(index) => {
                let mut accepted = true;
                self.navigate(|slides| accepted = slides.jump_to(index))?;
                if !accepted {
                    tracing::warn!(index, page_count = self.slides.page_count(), "page jump out of range");
                }
            }
            Action::StartCelebration => {
                self.navigate(|slides| {
                    slides.jump_to(Page::Photo.index());
                })?;
            }

            // ─────────────────────────────────────────────────────────────────
            // Page Content
            // ─────────────────────────────────────────────────────────────────
            Action::NextReason => return self.reasons.update(action),
            Action::TriggerConfetti => self.trigger_at(Instant::now()),
            Action::PrevVideo | Action::NextVideo => return self.videos.update(action),
            Action::OpenMedia(asset) => self.open_media(&asset),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let page = self.current_page();
        let layout = calculate_page_layout(area, !self.slides.is_first());

        self.page_component(page).draw(frame, layout.content)?;

        if let Some(indicators) = layout.indicators {
            self.nav.draw_indicators(frame, indicators);
        }
        if let Some(nav_area) = layout.nav {
            self.nav.draw(frame, nav_area)?;
        }

        // Confetti goes over the page but under dialogs
        if self.overlay.is_visible() {
            self.confetti.sync(self.overlay.triggered_at(), &mut rand::rng());
            self.confetti.draw_at(frame, area, Instant::now());
        } else {
            self.confetti.sync(None, &mut rand::rng());
        }

        if let Some(error) = self.error.as_deref() {
            if area.height > 0 {
                let row = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        format!(" Error: {} ", error),
                        Style::default()
                            .fg(Color::White)
                            .bg(Color::Red)
                            .add_modifier(Modifier::BOLD),
                    )),
                    row,
                );
            }
        }

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseButton, MouseEventKind};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn test_app(t0: Instant) -> App {
        App::new_at(
            &Config::default(),
            Content::default(),
            PathBuf::from("/nonexistent-assets"),
            t0,
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feed a key through the app the way the main loop does
    fn press(app: &mut App, code: KeyCode) {
        let mut action = app.handle_key_event(key(code)).unwrap();
        while let Some(a) = action {
            action = app.update(a).unwrap();
        }
    }

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| app.draw(frame, frame.area()).unwrap())
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_starts_on_welcome() {
        let app = test_app(Instant::now());
        assert_eq!(app.current_page(), Page::Welcome);
        assert!(!app.overlay.is_visible());
        assert_eq!(app.scheduler.len(), 1);
    }

    #[test]
    fn test_start_goes_to_photo() {
        let mut app = test_app(Instant::now());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_page(), Page::Photo);
    }

    #[test]
    fn test_navigation_is_bounded() {
        let mut app = test_app(Instant::now());
        press(&mut app, KeyCode::Enter);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.current_page(), Page::Celebration);

        for _ in 0..10 {
            press(&mut app, KeyCode::Char('h'));
        }
        assert_eq!(app.current_page(), Page::Welcome);
    }

    #[test]
    fn test_welcome_ignores_page_keys() {
        let mut app = test_app(Instant::now());
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.current_page(), Page::Welcome);
    }

    #[test]
    fn test_digit_and_home_keys() {
        let mut app = test_app(Instant::now());
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.current_page(), Page::Reasons);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.current_page(), Page::Welcome);
    }

    #[test]
    fn test_out_of_range_jump_is_rejected() {
        let mut app = test_app(Instant::now());
        app.update(Action::JumpToPage(2)).unwrap();
        app.update(Action::JumpToPage(99)).unwrap();
        assert_eq!(app.current_page(), Page::Videos);
    }

    #[test]
    fn test_intro_confetti_timing() {
        let t0 = Instant::now();
        let mut app = test_app(t0);

        app.tick_at(t0 + ms(1499));
        assert!(!app.overlay.is_visible());

        app.tick_at(t0 + ms(1500));
        assert!(app.overlay.is_visible());

        app.tick_at(t0 + ms(4499));
        assert!(app.overlay.is_visible());

        app.tick_at(t0 + ms(4500));
        assert!(!app.overlay.is_visible());
        assert!(app.scheduler.is_empty());
    }

    #[test]
    fn test_retrigger_extends_overlay() {
        let t0 = Instant::now();
        let mut app = test_app(t0);
        // Past the intro burst
        app.tick_at(t0 + ms(1500));
        app.tick_at(t0 + ms(4500));
        assert!(!app.overlay.is_visible());

        let t1 = t0 + ms(10_000);
        app.trigger_at(t1);
        app.trigger_at(t1 + ms(1000));

        app.tick_at(t1 + ms(3000));
        assert!(app.overlay.is_visible());
        app.tick_at(t1 + ms(3999));
        assert!(app.overlay.is_visible());
        app.tick_at(t1 + ms(4000));
        assert!(!app.overlay.is_visible());
    }

    #[test]
    fn test_overlay_hides_during_steady_input() {
        let t0 = Instant::now();
        let mut app = test_app(t0);
        let moved = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });

        // An event arrives on every poll, so no iteration is idle
        for n in (0..=5000).step_by(40) {
            app.step(Some(moved.clone()), t0 + ms(n)).unwrap();
            let showing = (1500..4500).contains(&n);
            assert_eq!(app.overlay.is_visible(), showing, "at {} ms", n);
        }
        assert!(app.scheduler.is_empty());
    }

    #[test]
    fn test_next_reason_triggers_confetti() {
        let mut app = test_app(Instant::now());
        app.update(Action::JumpToPage(Page::Reasons.index())).unwrap();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.reasons.carousel.current(), 1);
        assert!(app.overlay.is_visible());
        assert!(app.overlay.pending().is_some());
    }

    #[test]
    fn test_missing_asset_sets_error() {
        let mut app = test_app(Instant::now());
        app.update(Action::JumpToPage(Page::Photo.index())).unwrap();
        press(&mut app, KeyCode::Char('o'));
        assert!(app.pending_media.is_none());
        assert!(app.error.as_deref().unwrap().starts_with("Asset not found"));

        // Leaving the page clears it
        press(&mut app, KeyCode::Right);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_existing_asset_is_queued() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mom.JPG"), b"jpeg").unwrap();
        let mut app = App::new_at(
            &Config::default(),
            Content::default(),
            dir.path().to_path_buf(),
            Instant::now(),
        );
        app.update(Action::OpenMedia("/mom.JPG".to_string())).unwrap();
        assert_eq!(app.pending_media, Some(dir.path().join("mom.JPG")));
        assert!(app.error.is_none());
    }

    #[test]
    fn test_quit_dialog_flow() {
        let mut app = test_app(Instant::now());
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));

        // Page keys do not reach the page while a dialog is open
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_page(), Page::Welcome);

        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_dialog() {
        let mut app = test_app(Instant::now());
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modals.top(), Some(&Modal::Help));
        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
    }

    #[test]
    fn test_click_next_button() {
        let mut app = test_app(Instant::now());
        app.update(Action::JumpToPage(1)).unwrap();
        render(&mut app, 80, 24);

        // Next button sits two columns from the right edge of the nav bar
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 74,
            row: 22,
            modifiers: KeyModifiers::NONE,
        };
        let action = app.handle_mouse_event(click).unwrap();
        assert_eq!(action, Some(Action::NextPage));
    }

    #[test]
    fn test_render_every_page() {
        let t0 = Instant::now();
        let mut app = test_app(t0);
        for page in Page::ALL {
            app.update(Action::JumpToPage(page.index())).unwrap();
            let screen = render(&mut app, 100, 30);
            assert!(!screen.trim().is_empty(), "{} rendered nothing", page.name());
        }
    }

    #[test]
    fn test_render_chrome_and_confetti() {
        let mut app = test_app(Instant::now());
        app.update(Action::JumpToPage(3)).unwrap();
        app.update(Action::TriggerConfetti).unwrap();
        let screen = render(&mut app, 100, 30);
        assert!(screen.contains("3 of 4"));
        assert!(screen.contains("Why We Love You"));
        assert_eq!(app.confetti.burst().len(), Config::default().confetti_pieces);
    }

    #[test]
    fn test_render_tiny_terminal() {
        let mut app = test_app(Instant::now());
        for page in Page::ALL {
            app.update(Action::JumpToPage(page.index())).unwrap();
            app.update(Action::TriggerConfetti).unwrap();
            render(&mut app, 12, 5);
        }
        app.update(Action::OpenHelp).unwrap();
        render(&mut app, 12, 5);
    }
}
