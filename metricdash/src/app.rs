//! App state and main loop: input handling, applying poll results, and drawing.

use std::{io, time::Duration};

use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver},
    time::sleep,
};
use tracing::info;

use crate::client::MetricsClient;
use crate::poller::{self, PollerHandle};
use crate::state::{DashState, PollEvent};
use crate::ui::draw_dashboard;

const TICK: Duration = Duration::from_millis(200);

pub struct App {
    state: DashState,
    host: String,
    should_quit: bool,
}

impl App {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            state: DashState::new(),
            host: host.into(),
            should_quit: false,
        }
    }

    pub fn state(&self) -> &DashState {
        &self.state
    }

    pub async fn run(&mut self, client: MetricsClient, interval: Duration) -> anyhow::Result<()> {
        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let (tx, rx) = mpsc::unbounded_channel();
        info!(url = %client.url(), interval_secs = interval.as_secs(), "polling started");
        let poller = poller::spawn(client, interval, tx);

        // Main loop
        let res = self.event_loop(&mut terminal, rx, &poller).await;

        // Teardown: stop the timer, then give the terminal back
        poller.cancel();
        info!("polling stopped");
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut rx: UnboundedReceiver<PollEvent>,
        poller: &PollerHandle,
    ) -> anyhow::Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(k) = event::read()? {
                    if k.kind == KeyEventKind::Press
                        && matches!(
                            k.code,
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
                        )
                    {
                        self.should_quit = true;
                    }
                }
            }
            if self.should_quit {
                break;
            }

            // Apply whatever the fetch tasks reported since the last frame
            while let Ok(ev) = rx.try_recv() {
                self.apply(ev);
            }
            if poller.is_finished() {
                anyhow::bail!("poller stopped unexpectedly");
            }

            terminal.draw(|f| self.draw(f))?;

            sleep(TICK).await;
        }
        Ok(())
    }

    pub fn apply(&mut self, ev: PollEvent) {
        self.state.apply(ev);
    }

    pub fn draw(&self, f: &mut ratatui::Frame<'_>) {
        draw_dashboard(f, &self.state, &self.host, Utc::now());
    }
}
