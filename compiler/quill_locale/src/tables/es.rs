use crate::keys::{ConflictText, ExceptionText, NodeText};
use crate::locale::{ConflictTexts, ExceptionTexts, Locale, NodeTexts};

// Partial table; missing keys resolve through the English fallback.
pub static SPANISH: Locale = Locale {
    code: "es",
    name: "Español",
    nodes: &[
        (
            NodeText::AnyType,
            NodeTexts {
                name: "tipo cualquiera",
                description: "un tipo provisional que acepta cualquier valor",
            },
        ),
        (
            NodeText::BooleanType,
            NodeTexts {
                name: "tipo booleano",
                description: "⊤ o ⊥",
            },
        ),
        (
            NodeText::NoneType,
            NodeTexts {
                name: "tipo nada",
                description: "la ausencia de un valor",
            },
        ),
        (
            NodeText::NumberType,
            NodeTexts {
                name: "tipo número",
                description: "un número, opcionalmente con unidad",
            },
        ),
        (
            NodeText::TextType,
            NodeTexts {
                name: "tipo texto",
                description: "texto, opcionalmente en un idioma específico",
            },
        ),
        (
            NodeText::ListType,
            NodeTexts {
                name: "tipo lista",
                description: "una secuencia ordenada de valores de un tipo",
            },
        ),
        (
            NodeText::SetType,
            NodeTexts {
                name: "tipo conjunto",
                description: "una colección de valores únicos sin orden",
            },
        ),
        (
            NodeText::MapType,
            NodeTexts {
                name: "tipo mapa",
                description: "una correspondencia entre claves de un tipo y valores de otro",
            },
        ),
        (
            NodeText::UnionType,
            NodeTexts {
                name: "tipo unión",
                description: "un valor de cualquiera de varios tipos",
            },
        ),
        (
            NodeText::Language,
            NodeTexts {
                name: "idioma",
                description: "una etiqueta de idioma, como en o es-MX",
            },
        ),
    ],
    conflicts: &[
        (
            ConflictText::MalformedLanguage,
            ConflictTexts {
                message: "$1 no es un código de idioma; usa dos o tres letras minúsculas, como es o haw",
            },
        ),
        (
            ConflictText::UnknownLanguage,
            ConflictTexts {
                message: "No conozco ningún idioma con el código $1",
            },
        ),
        (
            ConflictText::DuplicateAlternative,
            ConflictTexts {
                message: "$1 ya es una alternativa de esta unión",
            },
        ),
    ],
    exceptions: &[
        (
            ExceptionText::ReadOnlyEdit,
            ExceptionTexts {
                name: "edición de solo lectura",
                explanation: "Este código es de solo lectura, así que no puedo cambiarlo.",
            },
        ),
        (
            ExceptionText::TypeMismatch,
            ExceptionTexts {
                name: "tipo incorrecto",
                explanation: "Esperaba un valor de tipo $1, pero recibí $2.",
            },
        ),
    ],
};
