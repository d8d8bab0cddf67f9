//! Mock dataset the page starts from.

use socialhub_types::{Author, Post, PostId, Recommendation, Trend};

/// Identity that authors posts published from the composer
pub fn default_viewer() -> Author {
    Author::new("Вы", "@you", "В")
}

pub fn mock_posts() -> Vec<Post> {
    vec![
        Post {
            id: PostId(1),
            author: Author::new("Анна Петрова", "@anna_dev", "АП"),
            content: "Сегодня запустили новую фичу в приложении! Теперь пользователи могут \
                      создавать группы для совместных проектов. Очень рада видеть, как идея \
                      воплощается в жизнь 🚀"
                .to_string(),
            image: None,
            likes: 24,
            comments: 8,
            shares: 3,
            timestamp: "2ч".to_string(),
            liked: false,
        },
        Post {
            id: PostId(2),
            author: Author::new("Дмитрий Козлов", "@dimkoz", "ДК"),
            content: "Делюсь подборкой лучших дизайн-систем 2024 года. Особенно впечатлила \
                      работа команды Airbnb - они создали действительно масштабируемое решение."
                .to_string(),
            image: Some(
                "https://v3.fal.media/files/rabbit/ZXgn7pUEK__juISIaVIJT_output.png".to_string(),
            ),
            likes: 156,
            comments: 23,
            shares: 45,
            timestamp: "4ч".to_string(),
            liked: false,
        },
        Post {
            id: PostId(3),
            author: Author::new("Мария Сидорова", "@maria_ux", "МС"),
            content: "Интересная статья о том, как UX влияет на конверсию в e-commerce. \
                      Ключевой вывод: простота навигации увеличивает продажи на 35%"
                .to_string(),
            image: None,
            likes: 89,
            comments: 12,
            shares: 18,
            timestamp: "6ч".to_string(),
            liked: false,
        },
    ]
}

pub fn recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation::new("Иван Иванов", "@ivan_dev", 1_200),
        Recommendation::new("Елена Смирнова", "@elena_design", 856),
        Recommendation::new("Tech Community", "@tech_ru", 5_700),
    ]
}

pub fn trends() -> Vec<Trend> {
    vec![
        Trend::new("#ReactJS", 12_500),
        Trend::new("#Дизайн", 8_900),
        Trend::new("#Стартап", 5_200),
        Trend::new("#Frontend", 15_700),
    ]
}
