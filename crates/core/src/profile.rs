//! Profile - 一次运行中收集到的回答

use std::fmt;

/// The three answers, in the order they are asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// 名字，可以为空
    pub name: String,

    /// 年龄，不做范围检查
    pub age: i32,

    /// 喜欢的编程语言，可以为空
    pub favorite_language: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, age: i32, favorite_language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            favorite_language: favorite_language.into(),
        }
    }

    /// Age next year. Widened to `i64` so `i32::MAX` does not overflow.
    pub fn next_year_age(&self) -> i64 {
        i64::from(self.age) + 1
    }

    /// The three greeting lines, without line terminators.
    pub fn greeting_lines(&self) -> [String; 3] {
        [
            format!("Hola {}, tienes {} años.", self.name, self.age),
            format!("El próximo año tendrás {} años 🎉", self.next_year_age()),
            format!("Tu lenguaje favorito es {}", self.favorite_language),
        ]
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.greeting_lines().join("\n"))
    }
}
