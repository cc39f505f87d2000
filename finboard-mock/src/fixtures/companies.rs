use finboard_core::CompanyRecord;

/// Canned code table, in table order.
pub fn all() -> Vec<CompanyRecord> {
    [
        ("삼성전자", "00126380"),
        ("SK하이닉스", "00164779"),
        ("현대자동차", "00164742"),
        ("LG전자", "00401731"),
        ("NAVER", "00266961"),
        ("카카오", "00258801"),
    ]
    .into_iter()
    .map(|(name, code)| CompanyRecord::new(name, code))
    .collect()
}
