use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "uz")]
    Uzbek,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "en")]
    English,
}

type Table = HashMap<&'static str, &'static str>;

static UZBEK: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("subscription.title", "Obuna"),
        ("subscription.oneMonth", "1 oy"),
        ("subscription.sixMonths", "6 oy"),
        ("subscription.oneYear", "1 yil"),
        ("subscription.none", "Obuna yo'q"),
        ("subscription.status.active", "Faol"),
        ("subscription.status.expired", "Muddati tugagan"),
        ("subscription.status.pending", "Kutilmoqda"),
        ("subscription.currentPlan", "Joriy tarif"),
        ("subscription.perMonth", "oyiga"),
        ("subscription.savings", "Tejash"),
        ("subscription.currency", "so'm"),
        ("subscription.expiresOn", "Amal qilish muddati"),
        ("subscription.daysLeft", "kun qoldi"),
        ("subscription.expiringSoon", "Obuna muddati tugashiga oz qoldi"),
        ("subscription.manage", "Obunani boshqarish"),
        ("subscription.subscribe", "Obuna bo'lish"),
        ("subscription.current", "Joriy"),
        ("subscription.close", "Yopish"),
        ("subscription.months", "oy"),
        ("payment.title", "To'lov"),
        ("payment.total", "Jami"),
        ("payment.confirm", "Tasdiqlash"),
        ("payment.cancel", "Bekor qilish"),
    ])
});

static RUSSIAN: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("subscription.title", "Подписка"),
        ("subscription.oneMonth", "1 месяц"),
        ("subscription.sixMonths", "6 месяцев"),
        ("subscription.oneYear", "1 год"),
        ("subscription.none", "Нет подписки"),
        ("subscription.status.active", "Активна"),
        ("subscription.status.expired", "Истекла"),
        ("subscription.status.pending", "Ожидает"),
        ("subscription.currentPlan", "Текущий тариф"),
        ("subscription.perMonth", "в месяц"),
        ("subscription.savings", "Экономия"),
        ("subscription.currency", "сум"),
        ("subscription.expiresOn", "Действует до"),
        ("subscription.daysLeft", "дн. осталось"),
        ("subscription.expiringSoon", "Подписка скоро истекает"),
        ("subscription.manage", "Управление подпиской"),
        ("subscription.subscribe", "Подписаться"),
        ("subscription.current", "Текущий"),
        ("subscription.close", "Закрыть"),
        ("subscription.months", "мес."),
        ("payment.title", "Оплата"),
        ("payment.total", "Итого"),
        ("payment.confirm", "Подтвердить"),
        ("payment.cancel", "Отмена"),
    ])
});

static ENGLISH: Lazy<Table> = Lazy::new(|| {
    HashMap::from([
        ("subscription.title", "Subscription"),
        ("subscription.oneMonth", "1 month"),
        ("subscription.sixMonths", "6 months"),
        ("subscription.oneYear", "1 year"),
        ("subscription.none", "None"),
        ("subscription.status.active", "Active"),
        ("subscription.status.expired", "Expired"),
        ("subscription.status.pending", "Pending"),
        ("subscription.currentPlan", "Current plan"),
        ("subscription.perMonth", "per month"),
        ("subscription.savings", "Savings"),
        ("subscription.currency", "UZS"),
        ("subscription.expiresOn", "Expires on"),
        ("subscription.daysLeft", "days left"),
        ("subscription.expiringSoon", "Your subscription expires soon"),
        ("subscription.manage", "Manage subscription"),
        ("subscription.subscribe", "Subscribe"),
        ("subscription.current", "Current"),
        ("subscription.close", "Close"),
        ("subscription.months", "months"),
        ("payment.title", "Payment"),
        ("payment.total", "Total"),
        ("payment.confirm", "Confirm"),
        ("payment.cancel", "Cancel"),
    ])
});

/// Text lookup for a single language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn table(&self) -> &'static Table {
        match self.language {
            Language::Uzbek => &UZBEK,
            Language::Russian => &RUSSIAN,
            Language::English => &ENGLISH,
        }
    }

    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        self.table().get(key).copied()
    }

    /// Translated text, or the key itself when the table has no entry
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }
}
