use serde::Deserialize;
use validator::Validate;

use crate::models::NewDriver;

// Request para registrar un motorista. Acepta los nombres en portugués
// y los nombres en inglés.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[serde(alias = "name")]
    #[validate(required, length(min = 1))]
    pub nome: Option<String>,

    #[serde(alias = "phone")]
    #[validate(required, length(min = 1))]
    pub telefone: Option<String>,

    #[serde(alias = "carModel", alias = "car_model")]
    #[validate(required, length(min = 1))]
    pub modelo_carro: Option<String>,

    #[serde(alias = "avgConsumption", alias = "avg_consumption")]
    #[validate(required)]
    pub consumo_medio: Option<f64>,
}

impl CreateDriverRequest {
    /// Convertir a modelo de dominio; `None` si falta algún campo.
    ///
    /// Un consumo medio de `0` cuenta como campo ausente.
    pub fn into_new_driver(self) -> Option<NewDriver> {
        Some(NewDriver {
            name: self.nome?,
            phone: self.telefone?,
            car_model: self.modelo_carro?,
            avg_consumption: self.consumo_medio.filter(|value| *value != 0.0)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_portuguese_and_english_names() {
        let portuguese: CreateDriverRequest = serde_json::from_value(json!({
            "nome": "Ana", "telefone": "119", "modelo_carro": "Onix", "consumo_medio": 12.0
        }))
        .unwrap();
        assert!(portuguese.validate().is_ok());

        let english: CreateDriverRequest = serde_json::from_value(json!({
            "name": "Ana", "phone": "119", "carModel": "Onix", "avgConsumption": 12.0
        }))
        .unwrap();
        assert!(english.validate().is_ok());
        assert_eq!(
            english.into_new_driver().unwrap(),
            NewDriver {
                name: "Ana".to_string(),
                phone: "119".to_string(),
                car_model: "Onix".to_string(),
                avg_consumption: 12.0,
            }
        );
    }

    #[test]
    fn test_missing_or_empty_fields_fail_validation() {
        let request: CreateDriverRequest = serde_json::from_value(json!({
            "nome": "", "telefone": "119", "modelo_carro": "Onix"
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("nome"));
        assert!(fields.contains_key("consumo_medio"));
        assert!(!fields.contains_key("telefone"));
    }

    #[test]
    fn test_zero_consumption_is_treated_as_missing() {
        let request: CreateDriverRequest = serde_json::from_value(json!({
            "nome": "Ana", "telefone": "119", "modelo_carro": "Onix", "consumo_medio": 0
        }))
        .unwrap();
        assert!(request.into_new_driver().is_none());

        let negative: CreateDriverRequest = serde_json::from_value(json!({
            "nome": "Ana", "telefone": "119", "modelo_carro": "Onix", "consumo_medio": -1.5
        }))
        .unwrap();
        assert_eq!(negative.into_new_driver().unwrap().avg_consumption, -1.5);
    }
}
