//! Static page content.
//!
//! Every section renders one of the lists below; nothing here changes at
//! runtime.

/// Layout hint for bento grid cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardSize {
    #[default]
    Small,
    Large,
}

/// Icon + title + description tile shared by several sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub size: CardSize,
}

impl Card {
    const fn small(icon: &'static str, title: &'static str, description: &'static str) -> Self {
        Self {
            icon,
            title,
            description,
            size: CardSize::Small,
        }
    }

    const fn large(icon: &'static str, title: &'static str, description: &'static str) -> Self {
        Self {
            icon,
            title,
            description,
            size: CardSize::Large,
        }
    }
}

/// Kinds of sites shown in the "create anything" grid.
pub const CREATE_ITEMS: &[Card] = &[
    Card::small("monitor", "Лендинги", "Высококонверсионные страницы"),
    Card::small(
        "shopping-cart",
        "Интернет-магазины",
        "Полноценные e-commerce решения",
    ),
    Card::small("briefcase", "Портфолио", "Профессиональные витрины работ"),
    Card::small("server", "SaaS платформы", "Сложные веб-приложения"),
];

pub const FEATURES: &[Card] = &[
    Card::large(
        "sparkles",
        "Генерация на основе AI",
        "Опишите своё видение, наблюдайте как оно материализуется в реальном времени",
    ),
    Card::small(
        "layout-grid",
        "Умная библиотека",
        "Готовые блоки, которые адаптируются под ваш бренд",
    ),
    Card::small("zap", "Деплой в один клик", "От идеи до живого сайта за минуты"),
    Card::large(
        "smartphone",
        "Адаптивность",
        "Идеально на любом экране, автоматически",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resource {
    pub card: Card,
    pub slug: &'static str,
}

pub const RESOURCES: &[Resource] = &[
    Resource {
        card: Card::small(
            "book-open",
            "Документация",
            "Полные руководства и справочник API",
        ),
        slug: "docs",
    },
    Resource {
        card: Card::small(
            "layout-grid",
            "Галерея шаблонов",
            "Начните с проверенных дизайнов",
        ),
        slug: "templates",
    },
    Resource {
        card: Card::small(
            "users",
            "Сообщество",
            "Присоединяйтесь к создателям по всему миру",
        ),
        slug: "community",
    },
];

/// Animated statistic in the trust bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustStat {
    pub target: u32,
    pub duration_ms: u32,
    pub label: &'static str,
}

pub const TRUST_STATS: &[TrustStat] = &[
    TrustStat {
        target: 10_000,
        duration_ms: 2000,
        label: "Создателей",
    },
    TrustStat {
        target: 50_000,
        duration_ms: 2500,
        label: "Сайтов создано",
    },
];

pub const TRUST_RATING: &str = "4.9";
pub const TRUST_RATING_STARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub author: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub metric: &'static str,
    pub rating: usize,
}

impl Testimonial {
    /// Letter shown in the avatar circle.
    pub fn initial(&self) -> String {
        self.author.chars().next().map(String::from).unwrap_or_default()
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "Александр К.",
        role: "Основатель стартапа",
        quote: "Создал лендинг для нашего продукта за 2 часа. То, на что раньше уходила неделя.",
        metric: "В 10 раз быстрее",
        rating: 5,
    },
    Testimonial {
        author: "Мария С.",
        role: "Фрилансер",
        quote: "Клиенты в восторге от скорости. AI действительно понимает, что нужно.",
        metric: "Создала 50+ сайтов",
        rating: 5,
    },
    Testimonial {
        author: "Дмитрий В.",
        role: "Product Manager",
        quote: "Используем для быстрого тестирования гипотез. Экономим время и бюджет.",
        metric: "Экономия 80% времени",
        rating: 5,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Что такое Webly AI?",
        answer: "Webly AI — это платформа для создания сайтов с помощью искусственного интеллекта. Просто опишите, что вам нужно, и AI сгенерирует готовый сайт за минуты.",
    },
    FaqEntry {
        question: "Нужны ли навыки программирования?",
        answer: "Нет, Webly AI создан для всех, независимо от технических навыков. Вы просто описываете желаемый результат текстом, а AI делает всё остальное.",
    },
    FaqEntry {
        question: "Могу ли я использовать свой домен?",
        answer: "Да, на тарифе Pro и выше вы можете подключить собственный домен. Бесплатный тариф включает поддомен webly.ai.",
    },
    FaqEntry {
        question: "Как работает AI-генерация?",
        answer: "Наша AI-модель анализирует ваше описание, выбирает оптимальную структуру, генерирует дизайн и код в реальном времени. Вы можете редактировать результат.",
    },
    FaqEntry {
        question: "Что включено в бесплатный план?",
        answer: "Бесплатный план включает 5 проектов, базовые шаблоны и поддержку сообщества. Это отличный способ попробовать платформу.",
    },
    FaqEntry {
        question: "Могу ли я экспортировать код?",
        answer: "Да, на тарифе Pro вы можете экспортировать чистый HTML/CSS/JS код вашего сайта и разместить его где угодно.",
    },
    FaqEntry {
        question: "Есть ли политика возврата средств?",
        answer: "Да, мы предоставляем 14-дневную гарантию возврата средств на всех платных тарифах. Если вам не понравится — вернём деньги.",
    },
    FaqEntry {
        question: "Как получить поддержку?",
        answer: "Бесплатные пользователи получают поддержку через сообщество. Платные тарифы включают email-поддержку и приоритетный чат.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        title: "Продукт",
        links: &["Возможности", "Тарифы", "Шаблоны", "Обновления"],
    },
    FooterColumn {
        title: "Ресурсы",
        links: &["Документация", "Справочник API", "Туториалы", "Сообщество"],
    },
    FooterColumn {
        title: "Компания",
        links: &["О нас", "Блог", "Карьера", "Контакты"],
    },
];

/// Icon names of the social buttons in the footer.
pub const SOCIAL_LINKS: &[&str] = &["twitter", "github", "linkedin"];

pub const LEGAL_LINKS: &[&str] = &["Политика конфиденциальности", "Условия использования"];

/// Group digits by thousands with a non-breaking space, as the `ru-RU`
/// locale does: `10000` becomes `"10 000"`.
pub fn format_grouped(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1990), "1\u{a0}990");
        assert_eq!(format_grouped(50_000), "50\u{a0}000");
        assert_eq!(format_grouped(1_234_567), "1\u{a0}234\u{a0}567");
    }

    #[test]
    fn test_testimonial_initial() {
        assert_eq!(TESTIMONIALS[0].initial(), "А");
        let anonymous = Testimonial {
            author: "",
            ..TESTIMONIALS[0]
        };
        assert_eq!(anonymous.initial(), "");
    }

    #[test]
    fn test_only_features_use_large_cards() {
        assert!(CREATE_ITEMS.iter().all(|c| c.size == CardSize::Small));
        assert!(RESOURCES.iter().all(|r| r.card.size == CardSize::Small));
        assert_eq!(
            FEATURES.iter().filter(|c| c.size == CardSize::Large).count(),
            2
        );
    }

    #[test]
    fn test_footer_columns_have_four_links() {
        assert_eq!(FOOTER_COLUMNS.len(), 3);
        assert!(FOOTER_COLUMNS.iter().all(|c| c.links.len() == 4));
    }
}
