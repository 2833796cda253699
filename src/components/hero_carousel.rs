//! Hero banner component
//!
//! Full-area campaign banner: a dimmed background image with the slogan
//! centered on top.

use crate::component::Component;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1589828236750-2580556f082e?q=80&w=1920&auto=format&fit=crop";
pub const HERO_IMAGE_ALT: &str = "Bomberos en acción combatiendo el fuego";
pub const HERO_HEADING: &str = "¡EL SACRIFICIO DE HOY, SALVA VIDAS MAÑANA!";
pub const HERO_SUBHEADING: &str = "Asociación en apoyo a los Bomberos Voluntarios del Perú.";

/// Static hero section
#[derive(Default)]
pub struct HeroCarousel;

impl Component for HeroCarousel {
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        // Background image stand-in, dimmed
        let background = Color::Rgb(40, 12, 8);
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(background)), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        let heading = Paragraph::new(Line::from(Span::styled(
            HERO_HEADING,
            Style::default()
                .fg(Color::White)
                .bg(background)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(heading, chunks[1]);

        let subheading = Paragraph::new(Line::from(Span::styled(
            HERO_SUBHEADING,
            Style::default().fg(Color::Gray).bg(background),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(subheading, chunks[3]);

        // Image caption in the bottom row
        let caption = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", HERO_IMAGE_ALT),
                Style::default().fg(Color::DarkGray).bg(background),
            ),
            Span::styled(
                HERO_IMAGE,
                Style::default()
                    .fg(Color::DarkGray)
                    .bg(background)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
        frame.render_widget(caption, chunks[5]);

        Ok(())
    }
}
