use super::catalog;

pub fn generate_system(subject: &str, topic: &str) -> String {
    format!(
        "You are an experienced Year 10 Science tutor writing NCEA-style practice questions.\n\
         You only write questions for these subjects and topics:\n{catalog}\n\
         The current selection is {subject} / {topic}. Stay strictly inside that topic.\n\
         Output contract: reply with a single JSON object of the form {{\"question\": \"...\"}} \
         and nothing else. No markdown, no commentary, no extra keys.",
        catalog = catalog::describe(),
    )
}

pub fn generate_user(subject: &str, topic: &str) -> String {
    format!(
        "Subject: {subject}\n\
         Topic: {topic}\n\
         Write one exam-style question pitched at Year 10 level that needs a written explanation \
         of two to four sentences. Use a realistic context where it helps.\n\
         Do not include the answer, hints or marking notes.\n\
         Do not refer to graphs, diagrams or images; any data must be given in the text."
    )
}

pub fn grade_system(subject: &str, topic: &str) -> String {
    format!(
        "You are a fair and encouraging NCEA Science marker grading a Year 10 student's answer.\n\
         You only mark answers for these subjects and topics:\n{catalog}\n\
         The current selection is {subject} / {topic}.\n\
         Award exactly one grade band:\n\
         - Not Achieved: the answer is missing, incorrect or shows little understanding.\n\
         - Achieved: the answer identifies or describes the relevant science correctly.\n\
         - Merit: the answer explains how or why, linking ideas with correct terminology.\n\
         - Excellence: the answer fully justifies or evaluates, linking several ideas with precise detail.\n\
         Give an integer score from 0 to 8 consistent with the band \
         (Not Achieved 0-2, Achieved 3-4, Merit 5-6, Excellence 7-8).\n\
         Reply with exactly one JSON object and nothing else:\n\
         {{\"grade_band\": \"Not Achieved|Achieved|Merit|Excellence\", \"score\": 0, \
         \"feedback\": \"...\", \"improved_answer\": \"...\"}}\n\
         feedback tells the student what was good and what is missing. \
         improved_answer is a model answer that would reach Excellence.",
        catalog = catalog::describe(),
    )
}

pub fn grade_user(subject: &str, topic: &str, question: &str, answer: &str) -> String {
    format!(
        "Subject: {subject}\n\
         Topic: {topic}\n\
         Question:\n{question}\n\n\
         Student answer:\n{answer}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_prompts_fix_contract_and_selection() {
        let system = generate_system("Physics", "Electricity");
        assert!(system.contains("Year 10"));
        assert!(system.contains(r#"{"question": "..."}"#));
        assert!(system.contains("Chemistry: Acids & Bases, Atomic Structure"));

        let user = generate_user("Physics", "Electricity");
        assert!(user.contains("Subject: Physics"));
        assert!(user.contains("Topic: Electricity"));
        assert!(user.contains("Do not include the answer"));
        assert!(user.contains("graphs"));
    }

    #[test]
    fn test_grade_prompts_name_every_band_and_field() {
        let system = grade_system("Biology", "Genetics");
        for band in ["Not Achieved", "Achieved", "Merit", "Excellence"] {
            assert!(system.contains(band), "missing band {band}");
        }
        for field in ["grade_band", "score", "feedback", "improved_answer"] {
            assert!(system.contains(field), "missing field {field}");
        }
        assert!(system.contains("0 to 8"));

        let user = grade_user("Biology", "Genetics", "What is a gene?", "A bit of DNA");
        assert!(user.contains("What is a gene?"));
        assert!(user.contains("A bit of DNA"));
    }
}
