use fleetview_core::{
    AcquisitionList, AcquisitionsScreen, ClientConfig, PageModel, Reveal, ScreenConfig,
    ScreenView, column_names,
};
use iced::widget::{Column, Row, button, center, column, container, scrollable, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Padding, Subscription, Task};
use std::time::{Duration, Instant};

// Roughly one frame at 60 Hz, only subscribed while the reveal is running
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const PAGE_BUTTON_SIZE: f32 = 38.0;
const CONTENT_TOP_PADDING: f32 = 40.0;

const TITLE_COLOR: Color = Color::from_rgb(0.2, 0.2, 0.2);
const ERROR_COLOR: Color = Color::from_rgb(1.0, 0.0, 0.0);
const ROW_STRIPE: Color = Color::from_rgb(0.95, 0.96, 0.98);

pub struct State {
    screen: AcquisitionsScreen,
    /// Clock the reveal animation is sampled at
    now: Instant,
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<AcquisitionList, String>),
    PageSelected(usize),
    Tick,
}

pub fn initialize() -> (State, Task<Message>) {
    let state = State {
        screen: AcquisitionsScreen::new(ScreenConfig::default()),
        now: Instant::now(),
    };

    (
        state,
        Task::perform(fetch(ClientConfig::default()), Message::Loaded),
    )
}

async fn fetch(config: ClientConfig) -> Result<AcquisitionList, String> {
    fleetview_core::fetch_acquisitions(&config)
        .await
        .map_err(|e| e.to_string())
}

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Loaded(result) => {
            state.now = Instant::now();
            match result {
                Ok(list) => state.screen.apply_loaded(list, state.now),
                Err(message) => state.screen.apply_failed(message),
            };
        }
        Message::PageSelected(page) => {
            if state.screen.set_page(page) {
                log::debug!("page {} selected", page);
            }
        }
        Message::Tick => {
            state.now = Instant::now();
        }
    }

    Task::none()
}

pub fn subscription(state: &State) -> Subscription<Message> {
    if state.screen.reveal().is_running(state.now) {
        iced::time::every(FRAME_INTERVAL).map(|_| Message::Tick)
    } else {
        Subscription::none()
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    match state.screen.view() {
        ScreenView::Loading => center(text("Loading...").size(20)).into(),
        ScreenView::Failed(message) => center(
            text(format!("Error: {}", message))
                .size(16)
                .color(ERROR_COLOR),
        )
        .into(),
        ScreenView::Ready(model) => ready_view(&model, state.screen.reveal(), state.now),
    }
}

fn ready_view<'a>(model: &PageModel<'_>, reveal: &Reveal, now: Instant) -> Element<'a, Message> {
    let opacity = reveal.opacity(now);

    let mut content = column![
        container(
            text("Vehicle Acquisitions")
                .size(26)
                .color(faded(TITLE_COLOR, opacity))
        )
        .center_x(Length::Fill),
        table(model, opacity),
    ]
    .spacing(16)
    .width(Length::Fill);

    if model.show_controls {
        content = content.push(pagination_controls(model, opacity));
    }

    // Slide in from above: the offset starts negative and settles at zero
    let padding = Padding {
        top: CONTENT_TOP_PADDING + reveal.offset_y(now),
        right: 2.0,
        bottom: 80.0,
        left: 2.0,
    };

    scrollable(container(content).padding(padding).width(Length::Fill)).into()
}

fn table<'a>(model: &PageModel<'_>, opacity: f32) -> Element<'a, Message> {
    let ink = faded(TITLE_COLOR, opacity);
    let stripe = faded(ROW_STRIPE, opacity);
    let columns = column_names(model.rows);

    let header = Row::with_children(
        columns
            .iter()
            .map(|name| cell(name.clone(), 14, ink)),
    )
    .spacing(8);

    let mut body = Column::new().push(container(header).padding(6));

    for (offset, row) in model.rows.iter().enumerate() {
        let cells: Vec<Element<'a, Message>> = if columns.is_empty() {
            vec![cell(row.as_value().to_string(), 13, ink)]
        } else {
            columns
                .iter()
                .map(|name| cell(row.field_text(name), 13, ink))
                .collect()
        };

        let line = container(Row::with_children(cells).spacing(8)).padding(6);
        let line = if offset % 2 == 0 {
            line.style(move |_theme| container::Style {
                background: Some(stripe.into()),
                ..Default::default()
            })
        } else {
            line
        };
        body = body.push(line.width(Length::Fill));
    }

    body.width(Length::Fill).into()
}

fn cell<'a>(content: String, size: u16, color: Color) -> Element<'a, Message> {
    text(content)
        .size(size)
        .color(color)
        .width(Length::Fill)
        .into()
}

fn pagination_controls<'a>(model: &PageModel<'_>, opacity: f32) -> Element<'a, Message> {
    let mut bar = Row::new().spacing(2).align_y(Alignment::Center);

    bar = bar.push(page_button(
        "<<".to_string(),
        model.first_enabled.then_some(Message::PageSelected(1)),
        false,
        opacity,
    ));

    if model.window.show_leading_ellipsis {
        bar = bar.push(ellipsis(opacity));
    }

    for &page in &model.window.pages {
        bar = bar.push(page_button(
            page.to_string(),
            Some(Message::PageSelected(page)),
            page == model.current_page,
            opacity,
        ));
    }

    if model.window.show_trailing_ellipsis {
        bar = bar.push(ellipsis(opacity));
    }

    bar = bar.push(page_button(
        ">>".to_string(),
        model
            .last_enabled
            .then_some(Message::PageSelected(model.total_pages)),
        false,
        opacity,
    ));

    container(bar).center_x(Length::Fill).into()
}

fn page_button<'a>(
    label: String,
    on_press: Option<Message>,
    selected: bool,
    opacity: f32,
) -> Element<'a, Message> {
    button(center(text(label).size(18)))
        .width(Length::Fixed(PAGE_BUTTON_SIZE))
        .height(Length::Fixed(PAGE_BUTTON_SIZE))
        .padding(0)
        .on_press_maybe(on_press)
        .style(move |theme, status| {
            let style = if selected {
                button::primary(theme, status)
            } else {
                button::secondary(theme, status)
            };
            button::Style {
                background: style.background.map(|b| faded_background(b, opacity)),
                text_color: faded(style.text_color, opacity),
                border: Border {
                    color: faded(style.border.color, opacity),
                    ..style.border
                },
                ..style
            }
        })
        .into()
}

fn ellipsis<'a>(opacity: f32) -> Element<'a, Message> {
    container(text("...").size(18).color(faded(TITLE_COLOR, opacity)))
        .width(Length::Fixed(PAGE_BUTTON_SIZE))
        .height(Length::Fixed(PAGE_BUTTON_SIZE))
        .center_x(Length::Fixed(PAGE_BUTTON_SIZE))
        .center_y(Length::Fixed(PAGE_BUTTON_SIZE))
        .into()
}

fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

fn faded_background(background: Background, opacity: f32) -> Background {
    match background {
        Background::Color(color) => Background::Color(faded(color, opacity)),
        other => other,
    }
}
