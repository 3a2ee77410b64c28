/// City, district and spelling variants mapped onto their province.
///
/// Order matters for the containment fallback: the first alias found inside a
/// longer string wins.
const REGION_ALIASES: &[(&str, &str)] = &[
    ("서울", "서울"),
    ("서울특별시", "서울"),
    ("경기", "경기"),
    ("경기도", "경기"),
    ("인천", "인천"),
    ("인천광역시", "인천"),
    ("부산", "부산"),
    ("부산광역시", "부산"),
    ("부산진구", "부산"),
    ("연제구", "부산"),
    ("기장군", "부산"),
    ("대구", "대구"),
    ("대구광역시", "대구"),
    ("광주", "광주"),
    ("광주광역시", "광주"),
    ("대전", "대전"),
    ("대전광역시", "대전"),
    ("울산", "울산"),
    ("울산광역시", "울산"),
    ("세종", "세종"),
    ("세종특별자치시", "세종"),
    ("강원", "강원"),
    ("강원도", "강원"),
    ("강원특별자치도", "강원"),
    ("충북", "충북"),
    ("충청북도", "충북"),
    ("충남", "충남"),
    ("충청남도", "충남"),
    ("전북", "전북"),
    ("전라북도", "전북"),
    ("전북특별자치도", "전북"),
    ("전남", "전남"),
    ("전라남도", "전남"),
    ("경북", "경북"),
    ("경상북도", "경북"),
    ("경남", "경남"),
    ("경상남도", "경남"),
    ("제주", "제주"),
    ("제주도", "제주"),
    ("제주특별자치도", "제주"),
    ("수원", "경기"),
    ("성남", "경기"),
    ("고양", "경기"),
    ("용인", "경기"),
    ("창원", "경남"),
    ("포항", "경북"),
    ("전주", "전북"),
    ("청주", "충북"),
    ("천안", "충남"),
    ("춘천", "강원"),
    ("seoul", "서울"),
    ("gyeonggi", "경기"),
    ("incheon", "인천"),
    ("busan", "부산"),
    ("daegu", "대구"),
    ("gwangju", "광주"),
    ("daejeon", "대전"),
    ("ulsan", "울산"),
    ("sejong", "세종"),
    ("gangwon", "강원"),
    ("chungbuk", "충북"),
    ("north chungcheong", "충북"),
    ("chungnam", "충남"),
    ("south chungcheong", "충남"),
    ("jeonbuk", "전북"),
    ("north jeolla", "전북"),
    ("jeonnam", "전남"),
    ("south jeolla", "전남"),
    ("gyeongbuk", "경북"),
    ("north gyeongsang", "경북"),
    ("gyeongnam", "경남"),
    ("south gyeongsang", "경남"),
    ("jeju", "제주"),
];

const NATIONWIDE_MARKERS: &[&str] = &["전국", "nationwide"];

/// True when a target entry lifts the geographic restriction.
pub fn is_nationwide(region: &str) -> bool {
    let lowered = region.to_lowercase();
    NATIONWIDE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Collapse a region string to its province; unknown values pass through trimmed and lowercased.
pub fn normalize_region(region: &str) -> String {
    let trimmed = region.trim();
    let lowered = trimmed.to_lowercase();

    if let Some((_, province)) = REGION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
    {
        return (*province).to_string();
    }

    REGION_ALIASES
        .iter()
        .find(|(alias, _)| lowered.contains(alias))
        .map(|(_, province)| (*province).to_string())
        .unwrap_or(lowered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_english_forms_share_a_province() {
        assert_eq!(normalize_region("서울특별시"), "서울");
        assert_eq!(normalize_region(" Seoul "), "서울");
        assert_eq!(normalize_region("South Gyeongsang"), "경남");
    }

    #[test]
    fn districts_resolve_by_containment() {
        assert_eq!(normalize_region("부산광역시 해운대구"), "부산");
        assert_eq!(normalize_region("경기도 수원시 팔달구"), "경기");
        assert_eq!(normalize_region("Seoul Metropolitan City"), "서울");
    }

    #[test]
    fn unknown_regions_pass_through() {
        assert_eq!(normalize_region("  Atlantis "), "atlantis");
        assert_eq!(normalize_region("ATLANTIS"), normalize_region("atlantis"));
    }

    #[test]
    fn nationwide_markers_are_case_insensitive() {
        assert!(is_nationwide("전국(일부 지역 제외)"));
        assert!(is_nationwide("Nationwide"));
        assert!(!is_nationwide("서울"));
    }
}
