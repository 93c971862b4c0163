//! Static content plan for the questionnaire.
//!
//! Everything the generated document contains lives here: the palette, the
//! cover and instruction texts, the seven numbered sections with their
//! questions and tips, and the closing note. The builder walks this plan
//! without branching on runtime data, so the output is fully determined by
//! these tables.

/// Default output path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "docs/ChatFlow360-Knowledge-Questionnaire.docx";

/// Default logo path, relative to the working directory.
pub const DEFAULT_LOGO: &str = "public/logo.png";

// Brand palette (hex RGB, no leading '#').
pub const TEAL: &str = "2F92AD";
pub const DARK_NAVY: &str = "0F1C2E";
pub const GRAY: &str = "666666";
pub const FAINT_GRAY: &str = "CCCCCC";
pub const BODY_TEXT: &str = "333333";
pub const BOX_BORDER: &str = "B0BFCB";
pub const BOX_FILL: &str = "F8FAFB";

/// A guidance note shown between a question and its answer box.
#[derive(Debug, Clone, Copy)]
pub struct Tip {
    pub en: &'static str,
    pub es: &'static str,
}

/// A bilingual prompt followed by a free-form answer box.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub en: &'static str,
    pub es: &'static str,
    pub tip: Option<Tip>,
    /// Visual height of the answer box, in text lines
    pub answer_lines: u32,
}

/// A numbered questionnaire section.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub number: u8,
    pub title_en: &'static str,
    pub title_es: &'static str,
    /// Whether the section starts on a fresh page
    pub page_break_before: bool,
    pub questions: &'static [Question],
}

// Cover page.

pub const COVER_TITLE: &str = "Knowledge Base\nOnboarding Questionnaire";
pub const COVER_SUBTITLE: &str = "Cuestionario de Base de Conocimiento";
pub const COVER_DESCRIPTION: &str = "Complete this questionnaire so your AI assistant can answer\n\
                                     visitor questions from day one.\n\n\
                                     Complete este cuestionario para que su asistente de IA pueda\n\
                                     responder las preguntas de los visitantes desde el primer dia.";

/// Fill-in field labels on the cover, each followed by an underscore rule.
pub const COVER_FIELDS: &[&str] = &[
    "Organization / Organizacion:",
    "Contact Name / Nombre de Contacto:",
    "Date / Fecha:",
];

/// The underscore rule drawn after each cover field label.
pub const COVER_FIELD_RULE: &str = "  _______________________________________________";

// Instructions.

pub const INSTRUCTIONS_TITLE: &str = "How to Use This Document";
pub const INSTRUCTIONS_EN: &str = "Answer each section in the language your customers use most. \
     If your audience is bilingual, include answers in both English and Spanish. \
     Write naturally — your AI assistant will use this information exactly as you provide it.";
pub const INSTRUCTIONS_ES: &str = "Responda cada seccion en el idioma que mas usan sus clientes. \
     Si su audiencia es bilingue, incluya respuestas en ingles y espanol. \
     Escriba de forma natural — su asistente de IA usara esta informacion exactamente como la proporcione.";

// Sections 1-6. Section 7 (the FAQ) has its own shape below.

pub const SECTIONS: &[Section] = &[
    Section {
        number: 1,
        title_en: "About Your Business",
        title_es: "Sobre Su Negocio",
        page_break_before: false,
        questions: &[
            Question {
                en: "What does your business do? Describe it in 2-3 sentences as you would tell a new customer.",
                es: "Que hace su negocio? Describalo en 2-3 oraciones como se lo diria a un nuevo cliente.",
                tip: None,
                answer_lines: 5,
            },
            Question {
                en: "How many years of experience do you have?",
                es: "Cuantos anos de experiencia tienen?",
                tip: None,
                answer_lines: 2,
            },
            Question {
                en: "What areas or regions do you serve?",
                es: "Que areas o regiones atienden?",
                tip: None,
                answer_lines: 2,
            },
            Question {
                en: "What languages does your team speak?",
                es: "Que idiomas habla su equipo?",
                tip: None,
                answer_lines: 2,
            },
        ],
    },
    Section {
        number: 2,
        title_en: "Services & Products",
        title_es: "Servicios y Productos",
        page_break_before: false,
        questions: &[
            Question {
                en: "List your main services or products with a brief description of each.",
                es: "Liste sus servicios o productos principales con una breve descripcion de cada uno.",
                tip: Some(Tip {
                    en: "Example: 'Immigration Law — We help with visa applications, green cards, and citizenship.'",
                    es: "Ejemplo: 'Derecho Migratorio — Ayudamos con solicitudes de visa, green cards y ciudadania.'",
                }),
                answer_lines: 8,
            },
            Question {
                en: "What is your most requested service/product?",
                es: "Cual es su servicio/producto mas solicitado?",
                tip: None,
                answer_lines: 3,
            },
            Question {
                en: "Are there services you DO NOT offer that people commonly ask about?",
                es: "Hay servicios que NO ofrecen pero que la gente pregunta frecuentemente?",
                tip: Some(Tip {
                    en: "This helps the AI avoid making promises you can't keep.",
                    es: "Esto ayuda a la IA a no hacer promesas que no pueden cumplir.",
                }),
                answer_lines: 3,
            },
        ],
    },
    Section {
        number: 3,
        title_en: "Pricing & Payment",
        title_es: "Precios y Formas de Pago",
        page_break_before: true,
        questions: &[
            Question {
                en: "What is your pricing structure? (fixed rates, hourly, free consultation, quote-based, etc.)",
                es: "Cual es su estructura de precios? (tarifas fijas, por hora, consulta gratis, cotizacion, etc.)",
                tip: None,
                answer_lines: 4,
            },
            Question {
                en: "What payment methods do you accept?",
                es: "Que metodos de pago aceptan?",
                tip: None,
                answer_lines: 2,
            },
            Question {
                en: "Do you offer financing or payment plans?",
                es: "Ofrecen financiamiento o planes de pago?",
                tip: None,
                answer_lines: 2,
            },
        ],
    },
    Section {
        number: 4,
        title_en: "How to Get Started",
        title_es: "Como Empezar",
        page_break_before: false,
        questions: &[
            Question {
                en: "What is the first step for a new customer? (call, book online, visit, fill a form, etc.)",
                es: "Cual es el primer paso para un nuevo cliente? (llamar, agendar online, visitar, llenar formulario, etc.)",
                tip: None,
                answer_lines: 3,
            },
            Question {
                en: "What should the customer bring or prepare for the first visit/meeting?",
                es: "Que debe traer o preparar el cliente para la primera visita/reunion?",
                tip: None,
                answer_lines: 3,
            },
            Question {
                en: "How long does the typical process take from start to finish?",
                es: "Cuanto tiempo toma el proceso tipico de inicio a fin?",
                tip: None,
                answer_lines: 2,
            },
        ],
    },
    Section {
        number: 5,
        title_en: "Location & Hours",
        title_es: "Ubicacion y Horarios",
        page_break_before: false,
        questions: &[
            Question {
                en: "What is your physical address?",
                es: "Cual es su direccion fisica?",
                tip: None,
                answer_lines: 2,
            },
            Question {
                en: "What are your business hours? (include weekends if applicable)",
                es: "Cual es su horario de atencion? (incluya fines de semana si aplica)",
                tip: None,
                answer_lines: 3,
            },
            Question {
                en: "Do you offer virtual/remote appointments?",
                es: "Ofrecen citas virtuales/remotas?",
                tip: None,
                answer_lines: 2,
            },
        ],
    },
    Section {
        number: 6,
        title_en: "Contact Information",
        title_es: "Informacion de Contacto",
        page_break_before: true,
        questions: &[
            Question {
                en: "Phone number:",
                es: "Numero de telefono:",
                tip: None,
                answer_lines: 1,
            },
            Question {
                en: "Email address:",
                es: "Correo electronico:",
                tip: None,
                answer_lines: 1,
            },
            Question {
                en: "Website URL:",
                es: "Sitio web:",
                tip: None,
                answer_lines: 1,
            },
            Question {
                en: "Social media profiles (Instagram, Facebook, LinkedIn, etc.):",
                es: "Perfiles de redes sociales (Instagram, Facebook, LinkedIn, etc.):",
                tip: None,
                answer_lines: 2,
            },
            Question {
                en: "How can customers book an appointment? (link, phone, form)",
                es: "Como pueden los clientes agendar una cita? (enlace, telefono, formulario)",
                tip: None,
                answer_lines: 2,
            },
        ],
    },
];

// Section 7: frequently asked questions.

pub const FAQ_NUMBER: u8 = 7;
pub const FAQ_TITLE_EN: &str = "Frequently Asked Questions";
pub const FAQ_TITLE_ES: &str = "Preguntas Frecuentes";
pub const FAQ_INTRO_EN: &str =
    "List the 5-10 questions your customers ask most often, with the answers you typically give.";
pub const FAQ_INTRO_ES: &str =
    "Liste las 5-10 preguntas que sus clientes hacen con mas frecuencia, con las respuestas que tipicamente da.";
/// Number of blank `Q{i} / P{i}:` prompts.
pub const FAQ_PROMPTS: u32 = 7;
pub const FAQ_ANSWER_LINES: u32 = 3;

// Closing note and branding footer.

pub const CLOSING_TITLE: &str = "What Happens Next?";
pub const CLOSING_EN: &str = "Once you complete this questionnaire, our team will upload this information \
     to your AI assistant's Knowledge Base. Your assistant will immediately be able \
     to answer visitor questions based on the information you provided.\n\n\
     You can always add, edit, or remove knowledge items later from your \
     ChatFlow360 dashboard under Settings > AI Settings > Knowledge Base.";
pub const CLOSING_ES: &str = "Una vez que complete este cuestionario, nuestro equipo subira esta informacion \
     a la Base de Conocimiento de su asistente de IA. Su asistente podra responder \
     inmediatamente las preguntas de los visitantes basandose en la informacion proporcionada.\n\n\
     Siempre podra agregar, editar o eliminar elementos de conocimiento desde su \
     panel de ChatFlow360 en Configuracion > Ajustes de IA > Base de Conocimiento.";

pub const FOOTER_SITE: &str = "chatflow360.com";
pub const FOOTER_TAGLINE: &str = "AI-Powered Live Chat for Miami Businesses";

// Document metadata.

pub const DOC_TITLE: &str = "Knowledge Base Onboarding Questionnaire";
pub const DOC_SUBJECT: &str = "Cuestionario de Base de Conocimiento";
pub const DOC_CREATOR: &str = "ChatFlow360";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_numbered_in_order() {
        for (index, section) in SECTIONS.iter().enumerate() {
            assert_eq!(section.number as usize, index + 1);
        }
        assert_eq!(FAQ_NUMBER as usize, SECTIONS.len() + 1);
    }

    #[test]
    fn test_every_question_has_answer_space() {
        for section in SECTIONS {
            assert!(!section.questions.is_empty());
            for question in section.questions {
                assert!(question.answer_lines >= 1);
                assert!(!question.en.is_empty());
                assert!(!question.es.is_empty());
            }
        }
    }

    #[test]
    fn test_multiline_strings_use_real_newlines() {
        // The continuation escapes must not leak leading whitespace.
        assert!(!COVER_DESCRIPTION.contains("  "));
        assert!(COVER_DESCRIPTION.contains("\n\n"));
        assert!(!CLOSING_EN.contains("   "));
    }
}
