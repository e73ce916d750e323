use mc_whatsapp::QuickMessage;

/// Where a WhatsApp link was opened from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickSource {
    FloatingButton,
    ProductInquiry,
    Quick(QuickMessage),
}

impl ClickSource {
    pub fn label(self) -> String {
        match self {
            ClickSource::FloatingButton => "floating_button".to_owned(),
            ClickSource::ProductInquiry => "product_inquiry".to_owned(),
            ClickSource::Quick(message) => format!("quick_{}", message.key()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    FormStart,
    FormSubmit,
    WhatsAppClick(ClickSource),
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::FormStart => "form_start",
            AnalyticsEvent::FormSubmit => "form_submit",
            AnalyticsEvent::WhatsAppClick(_) => "whatsapp_click",
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            AnalyticsEvent::FormStart | AnalyticsEvent::FormSubmit => "Contact Form",
            AnalyticsEvent::WhatsAppClick(_) => "WhatsApp",
        }
    }

    pub fn label(&self) -> Option<String> {
        match self {
            AnalyticsEvent::WhatsAppClick(source) => Some(source.label()),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<u32> {
        match self {
            AnalyticsEvent::WhatsAppClick(_) => Some(1),
            _ => None,
        }
    }
}

/// Receives page analytics events. Implementations must not fail loudly:
/// a page without analytics scripts is the normal case.
pub trait AnalyticsSink {
    fn track(&self, event: &AnalyticsEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_click_metadata() {
        let event = AnalyticsEvent::WhatsAppClick(ClickSource::Quick(QuickMessage::Entrega));
        assert_eq!(event.name(), "whatsapp_click");
        assert_eq!(event.category(), "WhatsApp");
        assert_eq!(event.label().as_deref(), Some("quick_entrega"));
        assert_eq!(event.value(), Some(1));
    }

    #[test]
    fn form_events_have_no_label() {
        for event in [AnalyticsEvent::FormStart, AnalyticsEvent::FormSubmit] {
            assert_eq!(event.category(), "Contact Form");
            assert_eq!(event.label(), None);
            assert_eq!(event.value(), None);
        }
        assert_eq!(AnalyticsEvent::FormStart.name(), "form_start");
        assert_eq!(AnalyticsEvent::FormSubmit.name(), "form_submit");
    }
}
