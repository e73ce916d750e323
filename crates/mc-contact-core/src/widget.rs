//! Floating WhatsApp button.
//!
//! Tracks scroll direction to tuck the button away while the visitor reads
//! downwards, and retargets its link to a greeting for the section in view.

use chrono::{Datelike, Timelike};
use mc_whatsapp::{compose_whatsapp_url, hours, messages::DEFAULT_SECTION, section_greeting};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatPose {
    Shown,
    Tucked,
}

/// Page section geometry, in document pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetUpdate {
    pub pose: FloatPose,
    pub section: String,
    pub href: String,
}

#[derive(Debug, Clone)]
pub struct FloatWidgetModel {
    number: String,
    threshold: f64,
    probe_offset: f64,
    last_scroll_top: f64,
    section: String,
}

impl FloatWidgetModel {
    pub fn new(number: impl Into<String>, threshold: f64, probe_offset: f64) -> Self {
        Self {
            number: number.into(),
            threshold,
            probe_offset,
            last_scroll_top: 0.0,
            section: DEFAULT_SECTION.to_owned(),
        }
    }

    /// Tucked only while moving down past the threshold.
    pub fn pose_for(&mut self, scroll_top: f64) -> FloatPose {
        let pose = if scroll_top > self.last_scroll_top && scroll_top > self.threshold {
            FloatPose::Tucked
        } else {
            FloatPose::Shown
        };
        self.last_scroll_top = scroll_top;
        pose
    }

    /// Picks the section under the probe line. When several match the last
    /// one wins; when none match the previous section is kept.
    pub fn locate_section(&mut self, scroll_top: f64, sections: &[SectionBox]) -> &str {
        let probe = scroll_top + self.probe_offset;
        if let Some(found) = sections.iter().rev().find(|s| s.contains(probe)) {
            if found.id != self.section {
                debug!(section = %found.id, "floating button retargeted");
                self.section = found.id.clone();
            }
        }
        &self.section
    }

    pub fn href(&self) -> String {
        compose_whatsapp_url(&self.number, section_greeting(&self.section))
    }

    pub fn on_scroll(&mut self, scroll_top: f64, sections: &[SectionBox]) -> WidgetUpdate {
        let pose = self.pose_for(scroll_top);
        self.locate_section(scroll_top, sections);
        WidgetUpdate {
            pose,
            section: self.section.clone(),
            href: self.href(),
        }
    }
}

/// Tooltip content for visits outside opening hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AfterHoursNotice {
    pub title: &'static str,
    pub hours: &'static str,
}

/// `None` while the store is open at local time `now`.
pub fn after_hours_notice<T: Datelike + Timelike>(now: &T) -> Option<AfterHoursNotice> {
    if hours::is_open_at(now) {
        None
    } else {
        Some(AfterHoursNotice {
            title: hours::AFTER_HOURS_TITLE,
            hours: hours::OPENING_HOURS_LABEL,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mc_whatsapp::{WIDGET_WHATSAPP_NUMBER, WhatsAppLink};

    fn widget() -> FloatWidgetModel {
        FloatWidgetModel::new(WIDGET_WHATSAPP_NUMBER, 200.0, 200.0)
    }

    fn page() -> Vec<SectionBox> {
        vec![
            SectionBox::new("home", 0.0, 800.0),
            SectionBox::new("produtos", 800.0, 1200.0),
            SectionBox::new("sobre", 2000.0, 600.0),
            SectionBox::new("contato", 2600.0, 900.0),
        ]
    }

    #[test]
    fn tucks_only_when_scrolling_down_past_threshold() {
        let mut widget = widget();
        assert_eq!(widget.pose_for(150.0), FloatPose::Shown);
        assert_eq!(widget.pose_for(250.0), FloatPose::Tucked);
        assert_eq!(widget.pose_for(400.0), FloatPose::Tucked);
        assert_eq!(widget.pose_for(300.0), FloatPose::Shown);
        assert_eq!(widget.pose_for(300.0), FloatPose::Shown);
    }

    #[test]
    fn probe_sits_below_viewport_top() {
        let mut widget = widget();
        assert_eq!(widget.locate_section(0.0, &page()), "home");
        assert_eq!(widget.locate_section(599.0, &page()), "home");
        assert_eq!(widget.locate_section(600.0, &page()), "produtos");
        assert_eq!(widget.locate_section(2450.0, &page()), "contato");
    }

    #[test]
    fn keeps_previous_section_in_gaps() {
        let mut widget = widget();
        widget.locate_section(1000.0, &page());
        assert_eq!(widget.locate_section(10_000.0, &page()), "produtos");
    }

    #[test]
    fn last_matching_section_wins() {
        let mut widget = widget();
        let overlapping = vec![
            SectionBox::new("produtos", 0.0, 1000.0),
            SectionBox::new("projetos", 100.0, 500.0),
        ];
        assert_eq!(widget.locate_section(150.0, &overlapping), "projetos");
    }

    #[test]
    fn scroll_retargets_link_with_section_greeting() {
        let mut widget = widget();
        let update = widget.on_scroll(900.0, &page());
        assert_eq!(update.pose, FloatPose::Tucked);
        assert_eq!(update.section, "produtos");

        let link = WhatsAppLink::parse(&update.href).unwrap();
        assert_eq!(link.phone, WIDGET_WHATSAPP_NUMBER);
        assert_eq!(link.text, section_greeting("produtos"));
    }

    #[test]
    fn unknown_section_uses_home_greeting() {
        let mut widget = widget();
        let update = widget.on_scroll(0.0, &[SectionBox::new("galeria", 0.0, 500.0)]);
        assert_eq!(update.section, "galeria");
        let link = WhatsAppLink::parse(&update.href).unwrap();
        assert_eq!(link.text, section_greeting("home"));
    }

    #[test]
    fn notice_only_outside_opening_hours() {
        let tuesday_night = NaiveDate::from_ymd_opt(2026, 10, 13)
            .and_then(|d| d.and_hms_opt(20, 0, 0))
            .unwrap();
        let notice = after_hours_notice(&tuesday_night).unwrap();
        assert_eq!(notice.title, "Fora do horário comercial");
        assert_eq!(notice.hours, "Seg-Sex: 7h-18h | Sáb: 7h-12h");

        let wednesday_morning = NaiveDate::from_ymd_opt(2026, 10, 14)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .unwrap();
        assert!(after_hours_notice(&wednesday_morning).is_none());
    }
}
