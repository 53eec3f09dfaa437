// ==========================================
// Generador de Manifiestos - Cálculo de pesos
// ==========================================
// Responsabilidad: peso real, peso volumétrico y peso facturable
// por pedido, según las reglas de facturación del transportista
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::order::Order;

// ==========================================
// WeightCalculator
// ==========================================
pub struct WeightCalculator {
    base_weight_kg: f64,
    weight_per_line_kg: f64,
    volumetric_divisor: f64,
    volumetric_blend: f64,
}

/// Redondeo a un decimal, empates al par
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

impl WeightCalculator {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            base_weight_kg: config.base_weight_kg,
            weight_per_line_kg: config.weight_per_line_kg,
            volumetric_divisor: config.volumetric_divisor,
            volumetric_blend: config.volumetric_blend,
        }
    }

    /// Completa los tres pesos de cada pedido
    pub fn compute(&self, orders: &mut [Order]) {
        for order in orders.iter_mut() {
            let real = self.real_weight(order.line_count);
            order.real_weight = Some(real);

            // volumétrico solo con los tres totales presentes
            order.volumetric_weight = match (
                order.total_length,
                order.total_height,
                order.total_width,
            ) {
                (Some(l), Some(h), Some(w)) => Some(self.volumetric_weight(l, h, w)),
                _ => None,
            };

            order.package_weight =
                self.package_weight(order.line_count, real, order.volumetric_weight);
        }
    }

    /// Peso real: depende solo de la cantidad de líneas del pedido
    pub fn real_weight(&self, line_count: usize) -> f64 {
        self.weight_per_line_kg * line_count as f64 + self.base_weight_kg
    }

    /// Peso volumétrico: largo × alto × ancho / divisor, a 1 decimal
    pub fn volumetric_weight(&self, length: f64, height: f64, width: f64) -> f64 {
        round_to_tenth(length * height * width / self.volumetric_divisor)
    }

    /// Peso facturable del paquete
    ///
    /// Tabla de decisión, primera regla que aplica gana:
    /// 1. una sola línea → 1
    /// 2. dos o tres líneas con peso real < 3 → 3
    /// 3. con volumétrico presente → redondeo de
    ///    real + factor × (volumétrico − real), empates al par
    /// 4. sin volumétrico → queda vacío
    pub fn package_weight(
        &self,
        line_count: usize,
        real_weight: f64,
        volumetric_weight: Option<f64>,
    ) -> Option<i64> {
        if line_count == 1 {
            return Some(1);
        }

        if (line_count == 2 || line_count == 3) && real_weight < 3.0 {
            return Some(3);
        }

        volumetric_weight.map(|vol| {
            (real_weight + self.volumetric_blend * (vol - real_weight)).round_ties_even() as i64
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn calculator() -> WeightCalculator {
        WeightCalculator::new(&PipelineConfig::default())
    }

    fn order(line_count: usize, totals: Option<(f64, f64, f64)>) -> Order {
        Order {
            order_id: "1".to_string(),
            first_seq: 1,
            first_created_at: NaiveDate::from_ymd_opt(2026, 1, 18)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
            line_count,
            total_length: totals.map(|t| t.0),
            total_height: totals.map(|t| t.1),
            total_width: totals.map(|t| t.2),
            real_weight: None,
            volumetric_weight: None,
            package_weight: None,
        }
    }

    #[test]
    fn test_real_weight_formula() {
        let calc = calculator();
        assert_eq!(calc.real_weight(1), 1.1);
        assert_eq!(calc.real_weight(2), 1.7);
        assert_eq!(calc.real_weight(5), 3.5);
    }

    #[test]
    fn test_volumetric_weight_one_decimal() {
        let calc = calculator();
        // 30 × 40 × 20 / 5000 = 4.8
        assert_eq!(calc.volumetric_weight(30.0, 40.0, 20.0), 4.8);
        // 10 × 9 × 5 / 5000 = 0.09 → 0.1
        assert_eq!(calc.volumetric_weight(10.0, 9.0, 5.0), 0.1);
    }

    #[test]
    fn test_single_line_order_weighs_one() {
        let calc = calculator();
        let mut orders = vec![order(1, Some((100.0, 100.0, 100.0)))];
        calc.compute(&mut orders);
        // aunque el volumétrico sea enorme, una línea factura 1
        assert_eq!(orders[0].package_weight, Some(1));
    }

    #[test]
    fn test_two_or_three_light_lines_weigh_three() {
        let calc = calculator();
        // 2 líneas: real = 1.7 < 3
        assert_eq!(calc.package_weight(2, 1.7, Some(50.0)), Some(3));
        // 3 líneas: real = 2.3 < 3
        assert_eq!(calc.package_weight(3, 2.3, None), Some(3));
    }

    #[test]
    fn test_four_lines_blend_real_and_volumetric() {
        let calc = calculator();
        // real = 2.9, vol = 10.0 → 2.9 + 0.75*7.1 = 8.225 → 8
        assert_eq!(calc.package_weight(4, 2.9, Some(10.0)), Some(8));
    }

    #[test]
    fn test_blend_rounds_ties_to_even() {
        let calc = calculator();
        // real = 2, vol = 4 → 2 + 0.75*2 = 3.5 → 4 (empate al par)
        assert_eq!(calc.package_weight(4, 2.0, Some(4.0)), Some(4));
        // real = 2, vol = 0 → 2 - 1.5 = 0.5 → 0
        assert_eq!(calc.package_weight(4, 2.0, Some(0.0)), Some(0));
    }

    #[test]
    fn test_no_volumetric_leaves_package_weight_empty() {
        let calc = calculator();
        assert_eq!(calc.package_weight(4, 2.9, None), None);

        let mut orders = vec![order(4, None)];
        calc.compute(&mut orders);
        assert!(orders[0].volumetric_weight.is_none());
        assert!(orders[0].package_weight.is_none());
        assert_eq!(orders[0].real_weight, Some(2.9));
    }

    #[test]
    fn test_compute_fills_all_weights() {
        let calc = calculator();
        let mut orders = vec![order(2, Some((10.0, 9.0, 5.0)))];
        calc.compute(&mut orders);

        assert_eq!(orders[0].real_weight, Some(1.7));
        assert_eq!(orders[0].volumetric_weight, Some(0.1));
        assert_eq!(orders[0].package_weight, Some(3));
    }

    #[test]
    fn test_volumetric_present_iff_totals_present() {
        let calc = calculator();
        let mut orders = vec![
            order(4, Some((30.0, 40.0, 20.0))),
            order(4, None),
        ];
        calc.compute(&mut orders);

        assert_eq!(orders[0].volumetric_weight, Some(4.8));
        assert!(orders[1].volumetric_weight.is_none());
    }
}
