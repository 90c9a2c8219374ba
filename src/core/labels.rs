//! Display labels and badge colours for operation types and stock balances.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Balance at or below which stock is flagged as critical.
pub const CRITICAL_STOCK_LIMIT: Decimal = dec!(5);

/// Balance at or below which stock is flagged as low.
pub const LOW_STOCK_LIMIT: Decimal = dec!(10);

/// Invoice operation type as classified by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Outbound shipment on consignment (CFOP 5917/6917).
    Saida,
    /// Physical return from consignment (CFOP 1918/2918).
    Retorno,
    /// Symbolic return (CFOP 1919/2919).
    Simbolico,
    /// Billing of consumed material (CFOP 5114/6114).
    Faturamento,
    /// Anything else.
    Outros,
}

impl OperationType {
    pub const ALL: [Self; 5] = [
        Self::Saida,
        Self::Retorno,
        Self::Simbolico,
        Self::Faturamento,
        Self::Outros,
    ];

    /// Wire code used by the backend (`"saida"`, `"retorno"`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Saida => "saida",
            Self::Retorno => "retorno",
            Self::Simbolico => "simbolico",
            Self::Faturamento => "faturamento",
            Self::Outros => "outros",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.code() == code)
    }

    /// Human-readable label (pt-BR).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Saida => "Saída para Consignação",
            Self::Retorno => "Retorno de Consignação",
            Self::Simbolico => "Retorno Simbólico",
            Self::Faturamento => "Faturamento",
            Self::Outros => "Outros",
        }
    }

    /// Tailwind classes for the badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Saida => "bg-blue-100 text-blue-800",
            Self::Retorno => "bg-green-100 text-green-800",
            Self::Simbolico => "bg-yellow-100 text-yellow-800",
            Self::Faturamento => "bg-purple-100 text-purple-800",
            Self::Outros => "bg-gray-100 text-gray-800",
        }
    }
}

/// Label for a raw operation code; unknown codes are shown verbatim.
pub fn operation_label(code: &str) -> String {
    match OperationType::from_code(code) {
        Some(op) => op.label().to_string(),
        None => code.to_string(),
    }
}

/// Badge classes for a raw operation code; unknown codes get the
/// [`OperationType::Outros`] colours.
pub fn operation_badge_class(code: &str) -> &'static str {
    OperationType::from_code(code)
        .unwrap_or(OperationType::Outros)
        .badge_class()
}

/// Stock level bucket for an available balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    /// Nothing left (or negative).
    Zerado,
    /// 5 units or fewer.
    Critico,
    /// 10 units or fewer.
    Baixo,
    Normal,
}

impl StockStatus {
    pub fn from_balance(balance: Decimal) -> Self {
        if balance <= Decimal::ZERO {
            Self::Zerado
        } else if balance <= CRITICAL_STOCK_LIMIT {
            Self::Critico
        } else if balance <= LOW_STOCK_LIMIT {
            Self::Baixo
        } else {
            Self::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Zerado => "Zerado",
            Self::Critico => "Crítico",
            Self::Baixo => "Baixo",
            Self::Normal => "Normal",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Zerado => "bg-gray-100 text-gray-800",
            Self::Critico => "bg-red-100 text-red-800",
            Self::Baixo => "bg-yellow-100 text-yellow-800",
            Self::Normal => "bg-green-100 text-green-800",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for op in OperationType::ALL {
            assert_eq!(OperationType::from_code(op.code()), Some(op));
        }
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert_eq!(OperationType::from_code("SAIDA"), None);
    }

    #[test]
    fn unknown_code_label_passes_through() {
        assert_eq!(operation_label("saida"), "Saída para Consignação");
        assert_eq!(operation_label("devolucao"), "devolucao");
        assert_eq!(operation_label(""), "");
    }

    #[test]
    fn unknown_code_badge_falls_back() {
        assert_eq!(operation_badge_class("retorno"), "bg-green-100 text-green-800");
        assert_eq!(operation_badge_class("devolucao"), "bg-gray-100 text-gray-800");
    }

    #[test]
    fn serde_uses_codes() {
        let json = serde_json::to_string(&OperationType::Simbolico).unwrap();
        assert_eq!(json, "\"simbolico\"");
        let op: OperationType = serde_json::from_str("\"faturamento\"").unwrap();
        assert_eq!(op, OperationType::Faturamento);
    }

    #[test]
    fn stock_thresholds() {
        assert_eq!(StockStatus::from_balance(dec!(-1)), StockStatus::Zerado);
        assert_eq!(StockStatus::from_balance(dec!(0)), StockStatus::Zerado);
        assert_eq!(StockStatus::from_balance(dec!(0.5)), StockStatus::Critico);
        assert_eq!(StockStatus::from_balance(dec!(5)), StockStatus::Critico);
        assert_eq!(StockStatus::from_balance(dec!(5.01)), StockStatus::Baixo);
        assert_eq!(StockStatus::from_balance(dec!(10)), StockStatus::Baixo);
        assert_eq!(StockStatus::from_balance(dec!(11)), StockStatus::Normal);
    }

    #[test]
    fn stock_labels() {
        assert_eq!(StockStatus::Critico.label(), "Crítico");
        assert_eq!(StockStatus::Zerado.badge_class(), "bg-gray-100 text-gray-800");
    }
}
