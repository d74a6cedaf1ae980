//! Canvas widget for calibration and two-point hand measurement.

use iced::mouse;
use iced::widget::canvas::{self, Event, Geometry, LineDash, Path, Program, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use crate::measure::{HandSession, MeasureStage, CARD_WIDTH_MM};

use super::app::Message;

/// Credit card height over width, used to draw the calibration box.
const CARD_ASPECT: f32 = 53.98 / CARD_WIDTH_MM as f32;

/// Interactive surface the user clicks on. Rendering follows the session
/// stage: the card box during calibration, points and the connecting line
/// afterwards.
pub struct MeasureSurface<'a> {
    pub session: &'a HandSession,
}

impl<'a> Program<Message> for MeasureSurface<'a> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if let Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(position) = cursor.position_in(bounds) {
                return (
                    canvas::event::Status::Captured,
                    Some(Message::SurfacePressed {
                        x: f64::from(position.x),
                        y: f64::from(position.y),
                        width: f64::from(bounds.width),
                        height: f64::from(bounds.height),
                    }),
                );
            }
        }
        (canvas::event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.12, 0.13, 0.16),
        );

        if self.session.stage() == MeasureStage::Calibration {
            let box_width = self.session.box_width_px() as f32;
            let box_height = box_width * CARD_ASPECT;
            let top_left = Point::new(
                (bounds.width - box_width) / 2.0,
                (bounds.height - box_height) / 2.0,
            );
            let card = Path::rectangle(top_left, iced::Size::new(box_width, box_height));
            frame.stroke(
                &card,
                Stroke::default()
                    .with_width(2.0)
                    .with_color(Color::from_rgb(0.36, 0.62, 0.98)),
            );
        }

        let points = self.session.points();
        if points.len() == 2 {
            let line = Path::line(
                Point::new(points[0].x as f32, points[0].y as f32),
                Point::new(points[1].x as f32, points[1].y as f32),
            );
            frame.stroke(
                &line,
                Stroke {
                    line_dash: LineDash {
                        segments: &[4.0, 4.0],
                        offset: 0,
                    },
                    ..Stroke::default()
                        .with_width(2.0)
                        .with_color(Color::from_rgb(0.36, 0.62, 0.98))
                },
            );
        }
        for point in points {
            let marker = Path::circle(Point::new(point.x as f32, point.y as f32), 6.0);
            frame.fill(&marker, Color::from_rgb(0.36, 0.62, 0.98));
        }

        vec![frame.into_geometry()]
    }
}
