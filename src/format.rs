// ==========================================
// UKM 智能经营分析仪表盘 - 数值格式化
// ==========================================
// 职责: 印尼盾与百分比的显示格式
// 规则: 印尼语区域格式，千分位 '.'，小数位 ','，保留两位小数
// ==========================================

/// 格式化印尼盾金额
///
/// 输出形如 "Rp 1.234.567,89"，负数为 "-Rp 1.234.567,89"。
/// 零和负数与正数遵循同一规则，不会 panic。
pub fn format_rupiah(amount: f64) -> String {
    let negative = amount.is_sign_negative() && amount != 0.0;
    let abs = amount.abs();

    // 先按两位小数取整，再拆分整数与小数部分
    let fixed = format!("{:.2}", abs);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (fixed, "00".to_string()),
    };

    let grouped = group_thousands(&int_part);
    let sign = if negative { "-" } else { "" };
    format!("{}Rp {},{}", sign, grouped, frac_part)
}

/// 格式化前端推导的百分比（固定两位小数）
///
/// 后端已给出的百分比值不经过此函数，按原值拼接展示
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

/// 格式化后端已给出的数值（按原值展示，不补小数位）
///
/// 整数值输出不带小数点，如 35.0 → "35"，8.3 → "8.3"
pub fn format_plain(value: f64) -> String {
    value.to_string()
}

/// 整数部分按三位插入 '.' 千分位
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
