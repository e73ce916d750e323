use mc_api_types::ContactSubmission;
use serde::{Deserialize, Serialize};

const ORCAMENTO: &str = "Olá! Gostaria de solicitar um orçamento para materiais de construção.\n\
\n\
Poderia me ajudar com informações sobre:\n\
- Preços\n\
- Disponibilidade\n\
- Condições de entrega\n\
\n\
Aguardo seu contato!";

const PRODUTOS: &str = "Olá! Gostaria de saber mais sobre os produtos da Madeiraço.\n\
\n\
Estou interessado em:\n\
- Madeiras para construção\n\
- Ripas e caibros\n\
- Tábuas e pranchas\n\
\n\
Poderia me fornecer mais detalhes?";

const ENTREGA: &str = "Olá! Gostaria de saber sobre as condições de entrega da Madeiraço.\n\
\n\
Preciso de informações sobre:\n\
- Área de entrega\n\
- Prazos\n\
- Custos de frete\n\
\n\
Obrigado!";

const VISITA: &str = "Olá! Gostaria de agendar uma visita à Madeiraço.\n\
\n\
Preciso ver os produtos pessoalmente e conversar sobre:\n\
- Qualidade dos materiais\n\
- Preços para compra em quantidade\n\
- Condições de pagamento\n\
\n\
Qual o melhor horário para uma visita?";

/// Canned messages offered in the quick-message panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum QuickMessage {
    Orcamento,
    Produtos,
    Entrega,
    Visita,
}

impl QuickMessage {
    pub const ALL: [QuickMessage; 4] = [
        QuickMessage::Orcamento,
        QuickMessage::Produtos,
        QuickMessage::Entrega,
        QuickMessage::Visita,
    ];

    /// Value of the button's `data-message` attribute.
    pub fn key(self) -> &'static str {
        match self {
            QuickMessage::Orcamento => "orcamento",
            QuickMessage::Produtos => "produtos",
            QuickMessage::Entrega => "entrega",
            QuickMessage::Visita => "visita",
        }
    }

    pub fn from_key(key: &str) -> Option<QuickMessage> {
        QuickMessage::ALL.into_iter().find(|m| m.key() == key)
    }

    pub fn text(self) -> &'static str {
        match self {
            QuickMessage::Orcamento => ORCAMENTO,
            QuickMessage::Produtos => PRODUTOS,
            QuickMessage::Entrega => ENTREGA,
            QuickMessage::Visita => VISITA,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuickMessage::Orcamento => "Solicitar Orçamento",
            QuickMessage::Produtos => "Informações sobre Produtos",
            QuickMessage::Entrega => "Condições de Entrega",
            QuickMessage::Visita => "Agendar Visita",
        }
    }

    /// Font Awesome class of the button icon.
    pub fn icon(self) -> &'static str {
        match self {
            QuickMessage::Orcamento => "fas fa-calculator",
            QuickMessage::Produtos => "fas fa-box",
            QuickMessage::Entrega => "fas fa-truck",
            QuickMessage::Visita => "fas fa-store",
        }
    }
}

pub const DEFAULT_SECTION: &str = "home";

const SECTION_GREETINGS: [(&str, &str); 5] = [
    (
        "home",
        "Olá! Visitei o site da Madeiraço e gostaria de saber mais sobre os produtos.",
    ),
    (
        "produtos",
        "Olá! Estou interessado nos produtos da Madeiraço. Poderia me fornecer mais informações?",
    ),
    (
        "sobre",
        "Olá! Gostaria de conhecer melhor a Madeiraço e seus serviços.",
    ),
    (
        "projetos",
        "Olá! Vi os projetos da Madeiraço e gostaria de conversar sobre minha necessidade.",
    ),
    (
        "contato",
        "Olá! Gostaria de entrar em contato para solicitar um orçamento.",
    ),
];

/// Greeting for the floating button while `section` is in view.
/// Unknown sections get the home greeting.
pub fn section_greeting(section: &str) -> &'static str {
    SECTION_GREETINGS
        .iter()
        .find(|(id, _)| *id == section)
        .or_else(|| SECTION_GREETINGS.iter().find(|(id, _)| *id == DEFAULT_SECTION))
        .map(|(_, greeting)| *greeting)
        .unwrap_or_default()
}

/// Quote request built from a product card's title and description.
pub fn product_inquiry_message(title: &str, description: &str) -> String {
    format!(
        "Olá! Gostaria de solicitar um orçamento para:\n\n*{}*\n{}\n\nPoderia me fornecer mais informações sobre preços e disponibilidade?",
        title.trim(),
        description.trim()
    )
}

/// Pre-filled WhatsApp text carrying a submitted contact form.
pub fn contact_form_message(submission: &ContactSubmission) -> String {
    format!(
        "*Nova mensagem do site Madeiraço*\n\n*Nome:* {}\n*E-mail:* {}\n*Telefone:* {}\n*Assunto:* {}\n\n*Mensagem:*\n{}",
        submission.name, submission.email, submission.phone, submission.subject, submission.message
    )
    .trim()
    .to_owned()
}
