//! Pricing plans and the monthly/yearly billing switch.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub fn is_yearly(&self) -> bool {
        matches!(self, BillingPeriod::Yearly)
    }

    pub fn toggle(&mut self) {
        *self = match self {
            BillingPeriod::Monthly => BillingPeriod::Yearly,
            BillingPeriod::Yearly => BillingPeriod::Monthly,
        };
    }
}

/// Price literal of a plan. Amounts are whole roubles per month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanPrice {
    Free,
    Paid { monthly: u32, yearly: u32 },
    /// Negotiated individually; the card shows the period label instead.
    Contact,
}

impl PlanPrice {
    pub fn for_period(&self, period: BillingPeriod) -> Option<u32> {
        match (self, period) {
            (PlanPrice::Free, _) => Some(0),
            (PlanPrice::Paid { monthly, .. }, BillingPeriod::Monthly) => Some(*monthly),
            (PlanPrice::Paid { yearly, .. }, BillingPeriod::Yearly) => Some(*yearly),
            (PlanPrice::Contact, _) => None,
        }
    }

    /// Whether the billing switch changes the displayed amount.
    pub fn varies_by_period(&self) -> bool {
        matches!(self, PlanPrice::Paid { monthly, yearly } if monthly != yearly)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: PlanPrice,
    /// Unit shown after the amount, or the whole price line for
    /// [`PlanPrice::Contact`].
    pub period_label: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub highlighted: bool,
}

impl Plan {
    pub fn displayed_price(&self, period: BillingPeriod) -> Option<u32> {
        self.price.for_period(period)
    }
}

/// Badge next to the yearly option.
pub const YEARLY_DISCOUNT_LABEL: &str = "-20%";

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Бесплатный",
        price: PlanPrice::Free,
        period_label: "₽",
        description: "Для знакомства с платформой",
        features: &[
            "5 проектов",
            "Базовые шаблоны",
            "Поддержка сообщества",
            "Брендинг Webly",
        ],
        cta: "Начать бесплатно",
        highlighted: false,
    },
    Plan {
        name: "Pro",
        price: PlanPrice::Paid {
            monthly: 2490,
            yearly: 1990,
        },
        period_label: "₽/мес",
        description: "Для профессионалов и команд",
        features: &[
            "Неограниченные проекты",
            "Продвинутые AI-функции",
            "Свои домены",
            "Приоритетная поддержка",
            "Убрать брендинг",
        ],
        cta: "Выбрать план",
        highlighted: true,
    },
    Plan {
        name: "Enterprise",
        price: PlanPrice::Contact,
        period_label: "Индивидуально",
        description: "Для крупных организаций",
        features: &[
            "White-label",
            "Выделенная поддержка",
            "Кастомное обучение AI",
            "SLA гарантии",
        ],
        cta: "Связаться",
        highlighted: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut period = BillingPeriod::default();
        assert!(!period.is_yearly());
        period.toggle();
        assert!(period.is_yearly());
        period.toggle();
        assert_eq!(period, BillingPeriod::Monthly);
    }

    #[test]
    fn test_contact_plan_has_no_amount() {
        let enterprise = PLANS.iter().find(|p| p.name == "Enterprise");
        assert!(enterprise.is_some());
        let enterprise = enterprise.unwrap();
        assert_eq!(enterprise.displayed_price(BillingPeriod::Monthly), None);
        assert_eq!(enterprise.displayed_price(BillingPeriod::Yearly), None);
    }

    #[test]
    fn test_exactly_one_highlighted_plan() {
        let highlighted: Vec<_> = PLANS.iter().filter(|p| p.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].name, "Pro");
    }

    #[test]
    fn test_only_paid_plan_changes_with_period() {
        let varying: Vec<_> = PLANS
            .iter()
            .filter(|p| p.price.varies_by_period())
            .map(|p| p.name)
            .collect();
        assert_eq!(varying, vec!["Pro"]);
    }

    #[test]
    fn test_varies_by_period() {
        assert!(!PlanPrice::Free.varies_by_period());
        assert!(!PlanPrice::Contact.varies_by_period());
        assert!(
            PlanPrice::Paid {
                monthly: 2490,
                yearly: 1990
            }
            .varies_by_period()
        );
        assert!(
            !PlanPrice::Paid {
                monthly: 100,
                yearly: 100
            }
            .varies_by_period()
        );
    }
}
