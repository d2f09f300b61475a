//! Prompts written before each read. None of them ends with a newline.

pub const NAME: &str = "Escribe tu nombre: ";

pub const AGE: &str = "¿Cuántos años tienes? ";

pub const FAVORITE_LANGUAGE: &str = "Cuál es tu lenguaje favorito de programación?";
