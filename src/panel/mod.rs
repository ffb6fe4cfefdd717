/// The edge-docked panel window.
///
/// A borderless always-on-top strip pinned to the configured screen edge.
/// Clicking the arrow tab animates the width between the collapsed and
/// expanded sizes; the expanded body lists the stored shortcuts. All state
/// mutation happens here on the UI thread - the tray thread only enqueues
/// `TrayCommand`s that `update` drains.
pub mod geometry;
pub mod state;
pub mod style;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crossbeam::channel::Receiver;
use iced::widget::canvas;
use iced::widget::{Button, Canvas, Column, Container, MouseArea, Row, Scrollable, Text};
use iced::{
    executor, mouse, window, Alignment, Application, Color, Command, Element, Length, Point,
    Rectangle, Renderer, Size, Subscription, Theme,
};

use crate::config::{self, AppConfig, Side};
use crate::ipc::TrayCommand;
use crate::launcher;
use crate::screen::ScreenSize;
use crate::shortcuts::ShortcutStore;
use crate::tray::TrayHandle;

use geometry::{panel_rect, PanelRect};
use state::{PanelState, Phase, TICK_MILLIS};

/// How often the panel drains the tray command queue.
const TRAY_POLL_MILLIS: u64 = 50;

#[derive(Debug, Clone)]
pub enum Message {
    TabPressed,
    AnimationTick,
    MenuToggled,
    AddShortcutRequested,
    LaunchRequested(PathBuf),
    RemoveRequested(PathBuf),
    SideSelected(Side),
    TrayPoll,
    ExitRequested,
}

pub struct PanelFlags {
    pub config: AppConfig,
    pub shortcuts: ShortcutStore,
    pub screen: ScreenSize,
    pub tray: Option<TrayHandle>,
    pub tray_commands: Receiver<TrayCommand>,
}

pub struct Panel {
    config: AppConfig,
    shortcuts: ShortcutStore,
    screen: ScreenSize,
    state: PanelState,
    /// The list stays attached through a collapse until the animation lands.
    list_attached: bool,
    menu_open: bool,
    tab_color: Color,
    tray: Option<TrayHandle>,
    tray_commands: Receiver<TrayCommand>,
}

/// Window settings for the collapsed panel at startup.
pub fn window_settings(config: &AppConfig, screen: ScreenSize) -> window::Settings {
    let rect = panel_rect(config.side, config.width_collapsed, screen);
    window::Settings {
        size: Size::new(rect.width as f32, rect.height as f32),
        position: window::Position::Specific(Point::new(rect.x as f32, rect.y as f32)),
        resizable: false,
        decorations: false,
        level: window::Level::AlwaysOnTop,
        ..window::Settings::default()
    }
}

impl Panel {
    fn current_rect(&self) -> PanelRect {
        panel_rect(self.config.side, self.state.current_width(), self.screen)
    }

    /// Rectangle the OS window should occupy right now. While the context
    /// menu is open the window borrows the expanded width so the menu fits
    /// over a collapsed panel; the animation state is not touched.
    fn window_rect(&self) -> PanelRect {
        if self.menu_open {
            panel_rect(self.config.side, self.state.expanded_width(), self.screen)
        } else {
            self.current_rect()
        }
    }

    fn apply_geometry(&self) -> Command<Message> {
        let rect = self.window_rect();
        Command::batch(vec![
            window::resize(
                window::Id::MAIN,
                Size::new(rect.width as f32, rect.height as f32),
            ),
            window::move_to(window::Id::MAIN, Point::new(rect.x as f32, rect.y as f32)),
        ])
    }

    fn toggle_panel(&mut self) {
        if self.state.toggle() && self.state.phase() == Phase::Expanding {
            // Attach as soon as expansion starts; detachment waits for the
            // collapse to land (see AnimationTick).
            self.list_attached = true;
        }
    }

    fn show_panel(&mut self) {
        if self.state.phase() == Phase::Collapsed {
            self.toggle_panel();
        }
    }

    /// Ask the user for a path and append it to the store.
    fn add_shortcut(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_title("Choose an application or shortcut")
            .add_filter("Executables", &["exe"])
            .add_filter("Shortcuts", &["lnk"])
            .add_filter("All Files", &["*"])
            .pick_file();
        let Some(path) = picked else {
            return;
        };
        match self.shortcuts.add(path.clone()) {
            Ok(true) => tracing::info!(?path, "shortcut added"),
            Ok(false) => {}
            Err(err) => tracing::error!(%err, ?path, "failed to persist shortcut list"),
        }
    }

    fn remove_shortcut(&mut self, path: &Path) {
        match self.shortcuts.remove(path) {
            Ok(true) => tracing::info!(?path, "shortcut removed"),
            Ok(false) => {}
            Err(err) => tracing::error!(%err, ?path, "failed to persist shortcut list"),
        }
    }

    /// Re-dock to `side`: persist, redraw the arrow, reposition at the
    /// current width. No animation.
    fn set_side(&mut self, side: Side) -> Command<Message> {
        if self.config.side != side {
            self.config.side = side;
            if let Err(err) = config::save_config(&self.config) {
                tracing::error!(%err, "failed to persist dock side");
            }
        }
        self.apply_geometry()
    }

    /// Stop the tray loop first so its thread never outlives the window it
    /// signals, then close the panel.
    fn exit(&mut self) -> Command<Message> {
        if let Some(tray) = self.tray.take() {
            tray.shutdown();
        }
        window::close(window::Id::MAIN)
    }

    fn run_tray_command(&mut self, command: TrayCommand) -> Command<Message> {
        tracing::debug!(?command, "tray command");
        match command {
            TrayCommand::ShowPanel => {
                self.show_panel();
                Command::none()
            }
            TrayCommand::AddShortcut => {
                self.add_shortcut();
                Command::none()
            }
            TrayCommand::SetSide(side) => self.set_side(side),
            TrayCommand::Exit => self.exit(),
        }
    }

    fn shortcut_list(&self) -> Element<'_, Message> {
        let mut rows = Column::new().spacing(2).padding([4, 2]);
        for path in self.shortcuts.entries() {
            rows = rows.push(self.shortcut_row(path));
        }
        Container::new(Scrollable::new(rows).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::list_background())
            .into()
    }

    fn shortcut_row(&self, path: &Path) -> Element<'_, Message> {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Row::new()
            .spacing(2)
            .align_items(Alignment::Center)
            .push(
                Button::new(Text::new(name).size(13))
                    .on_press(Message::LaunchRequested(path.to_path_buf()))
                    .style(style::launch_button())
                    .width(Length::Fill)
                    .padding(6),
            )
            .push(
                Button::new(Text::new("x").size(13))
                    .on_press(Message::RemoveRequested(path.to_path_buf()))
                    .style(style::remove_button())
                    .padding([6, 8]),
            )
            .into()
    }

    fn context_menu(&self) -> Element<'_, Message> {
        let entry = |label: &str, message: Message| {
            Button::new(Text::new(label.to_string()).size(13))
                .on_press(message)
                .style(style::menu_button())
                .width(Length::Fill)
                .padding(6)
        };

        let menu = Column::new()
            .spacing(2)
            .padding(4)
            .width(Length::Fill)
            .push(entry("Add shortcut", Message::AddShortcutRequested))
            .push(entry("Dock left", Message::SideSelected(Side::Left)))
            .push(entry("Dock right", Message::SideSelected(Side::Right)))
            .push(entry("Exit", Message::ExitRequested));

        Container::new(menu)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::list_background())
            .into()
    }
}

impl Application for Panel {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = PanelFlags;

    fn new(flags: PanelFlags) -> (Self, Command<Message>) {
        let state = PanelState::new(flags.config.width_collapsed, flags.config.width_expanded);
        let tab_color = style::panel_color(&flags.config.color);
        let panel = Panel {
            state,
            tab_color,
            list_attached: false,
            menu_open: false,
            config: flags.config,
            shortcuts: flags.shortcuts,
            screen: flags.screen,
            tray: flags.tray,
            tray_commands: flags.tray_commands,
        };
        (panel, Command::none())
    }

    fn title(&self) -> String {
        String::from("Edgebar")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::TabPressed => {
                if self.menu_open {
                    self.menu_open = false;
                    return self.apply_geometry();
                }
                self.toggle_panel();
                Command::none()
            }
            Message::AnimationTick => {
                if !self.state.is_animating() {
                    return Command::none();
                }
                self.state.tick();
                if self.state.phase() == Phase::Collapsed {
                    self.list_attached = false;
                }
                self.apply_geometry()
            }
            Message::MenuToggled => {
                self.menu_open = !self.menu_open;
                self.apply_geometry()
            }
            Message::AddShortcutRequested => {
                self.menu_open = false;
                self.add_shortcut();
                self.apply_geometry()
            }
            Message::LaunchRequested(path) => {
                launcher::launch(&path);
                Command::none()
            }
            Message::RemoveRequested(path) => {
                self.remove_shortcut(&path);
                Command::none()
            }
            Message::SideSelected(side) => {
                self.menu_open = false;
                self.set_side(side)
            }
            Message::TrayPoll => {
                let mut commands = Vec::new();
                while let Ok(command) = self.tray_commands.try_recv() {
                    commands.push(self.run_tray_command(command));
                }
                Command::batch(commands)
            }
            Message::ExitRequested => self.exit(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let tab = MouseArea::new(
            Canvas::new(ArrowIndicator {
                side: self.config.side,
            })
            .width(Length::Fixed(self.state.collapsed_width() as f32))
            .height(Length::Fill),
        )
        .on_press(Message::TabPressed);

        let mut body = Row::new().push(tab);
        if self.menu_open {
            body = body.push(self.context_menu());
        } else if self.list_attached {
            body = body.push(self.shortcut_list());
        }

        let content = Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::panel_background(self.tab_color));

        MouseArea::new(content)
            .on_right_press(Message::MenuToggled)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();
        if self.state.is_animating() {
            subscriptions.push(
                iced::time::every(Duration::from_millis(TICK_MILLIS))
                    .map(|_| Message::AnimationTick),
            );
        }
        if self.tray.is_some() {
            subscriptions.push(
                iced::time::every(Duration::from_millis(TRAY_POLL_MILLIS))
                    .map(|_| Message::TrayPoll),
            );
        }
        Subscription::batch(subscriptions)
    }
}

/// Arrowhead on the collapsed tab; the tip faces the direction the panel
/// grows in.
struct ArrowIndicator {
    side: Side,
}

impl canvas::Program<Message> for ArrowIndicator {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let mid = bounds.height / 2.0;
        let width = bounds.width;

        let arrow = canvas::Path::new(|p| {
            match self.side {
                Side::Left => {
                    p.move_to(Point::new(width - 6.0, mid - 5.0));
                    p.line_to(Point::new(width - 6.0, mid + 5.0));
                    p.line_to(Point::new(width - 2.0, mid));
                }
                Side::Right => {
                    p.move_to(Point::new(6.0, mid - 5.0));
                    p.line_to(Point::new(6.0, mid + 5.0));
                    p.line_to(Point::new(2.0, mid));
                }
            }
            p.close();
        });
        frame.fill(&arrow, Color::WHITE);

        vec![frame.into_geometry()]
    }
}
