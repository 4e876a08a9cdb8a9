//! Prompt templates for the advisor

use crate::routing::{Institution, Topic};

/// Templates for the system prompt and the assembled user context
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt: who the advisor is and how answers are structured
    pub fn system() -> &'static str {
        r#"Ти си BGGovAI — граждански съветник за България (само централна администрация).
Отговаряй на български, ясно, човешки, но институционално.

Правила:
- Давай подробен, структуриран отговор по подразбиране.
- Когато има несигурност/варианти: дай 2–3 алтернативи и задай 1 уточняващ въпрос.
- Не измисляй членове/алинии. Ако липсва конкретен текст — кажи какво да се провери и къде.
- Не твърди, че проверяваш „в реално време“, освен ако изрично е дадено.
- Формат на отговора:
  1) Резюме (2–3 реда)
  2) Стъпки
  3) Документи
  4) Подаване: онлайн (ако е налично) / на място
  5) Какво да провериш допълнително
  6) (по желание) Уточняващ въпрос"#
    }

    /// User content: the question plus everything the router decided
    pub fn context(
        question: &str,
        topic: Topic,
        clarification: Option<&str>,
        institutions: &[&Institution],
    ) -> String {
        let mut context = format!("Въпрос: {}\n\n", question);
        context.push_str("Контекст: България, централна администрация. Дай практически стъпки.\n");
        context.push_str(&format!("Разпозната тема: {}\n", topic.code()));

        if let Some(follow) = clarification {
            context.push_str(&format!("Нужна уточняваща информация: {}\n", follow));
        }

        context.push_str("\nОфициални държавни институции (релевантни за проверка):\n");
        let lines: Vec<String> = institutions
            .iter()
            .map(|i| format!("- {}: {}", i.name, i.url))
            .collect();
        context.push_str(&lines.join("\n"));

        context
    }
}
