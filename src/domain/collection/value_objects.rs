//! Collection Context - Value Objects

use serde::{Deserialize, Deserializer, Serialize, Serializer};

integer_id!(
    /// 用户标识（外部身份系统分配，本服务只做引用）
    OwnerId
);
integer_id!(
    /// 集合标识
    CollectionId
);
integer_id!(
    /// 集合条目标识
    ItemId
);
integer_id!(
    /// 课程标识
    CourseId
);

/// 集合类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    /// 购物车
    Cart,
    /// 收藏夹
    Favorites,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Cart => "cart",
            CollectionKind::Favorites => "favorites",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "cart" => Some(CollectionKind::Cart),
            "favorites" => Some(CollectionKind::Favorites),
            _ => None,
        }
    }

    /// 是否需要计算总价（只有购物车需要）
    pub fn has_total(&self) -> bool {
        matches!(self, CollectionKind::Cart)
    }
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 金额（以分为单位的整数，避免浮点误差）
///
/// 不变量:
/// - 通过 `parse` 构造的金额非负，且最多两位小数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// 溢出时返回 None
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// 解析十进制金额字符串，例如 "49.99"、"10"、"0.5"
    pub fn parse(input: &str) -> Result<Self, &'static str> {
        let input = input.trim();
        if input.is_empty() {
            return Err("金额不能为空");
        }
        if input.starts_with('-') {
            return Err("金额不能为负数");
        }

        let (whole, fraction) = match input.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (input, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err("无效的金额格式");
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err("无效的金额格式");
        }
        if fraction.len() > 2 {
            return Err("金额最多保留两位小数");
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| "金额超出范围")?
        };
        let fraction: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| "无效的金额格式")? * 10,
            _ => fraction.parse().map_err(|_| "无效的金额格式")?,
        };

        whole
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(fraction))
            .map(Money)
            .ok_or("金额超出范围")
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawMoney {
            Integer(u64),
            Float(f64),
            Text(String),
        }

        let text = match RawMoney::deserialize(deserializer)? {
            RawMoney::Integer(value) => value.to_string(),
            RawMoney::Float(value) => value.to_string(),
            RawMoney::Text(value) => value,
        };
        Money::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_parse() {
        assert_eq!(Money::parse("49.99").unwrap().cents(), 4999);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("0.5").unwrap().cents(), 50);
        assert_eq!(Money::parse(".25").unwrap().cents(), 25);
        assert!(Money::parse("-1").is_err());
        assert!(Money::parse("1.999").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse(".").is_err());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(4999).to_string(), "49.99");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_money_checked_add() {
        let total = Money::from_cents(4999).checked_add(Money::from_cents(1));
        assert_eq!(total, Some(Money::from_cents(5000)));

        let huge = Money::parse("90000000000000000").unwrap();
        assert_eq!(huge.checked_add(huge), None);
    }

    #[test]
    fn test_money_json() {
        let from_number: Money = serde_json::from_str("49.99").unwrap();
        let from_string: Money = serde_json::from_str("\"49.99\"").unwrap();
        let from_integer: Money = serde_json::from_str("12").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_integer.cents(), 1200);
        assert_eq!(serde_json::to_string(&from_number).unwrap(), "\"49.99\"");
    }

    #[test]
    fn test_collection_kind_round_trip() {
        for kind in [CollectionKind::Cart, CollectionKind::Favorites] {
            assert_eq!(CollectionKind::from_str(kind.as_str()), Some(kind));
        }
        assert!(CollectionKind::Cart.has_total());
        assert!(!CollectionKind::Favorites.has_total());
    }
}
