//! Built-in indicator catalogue.
//!
//! Candidate order is priority order. Keyed-series codes use `{iso2}` /
//! `{iso3}` placeholders that adapters expand per country.

use crate::models::Frequency::{Annual, Monthly, Quarterly};
use crate::models::Transform::{Mom, Qoq, Ratio, Yoy};
use crate::models::{IndicatorSpec, SourceCandidate as C};
use crate::provider::ids::{DBNOMICS, ECB, EUROSTAT, GMD, IMF, OECD, WORLD_BANK};

const WDI: &str = "WDI";
const IFS: &str = "IFS";
const WEO: &str = "WEO:latest";

pub fn builtin_specs() -> Vec<IndicatorSpec> {
    vec![
        // ====================================================================
        // Prices and money
        // ====================================================================
        IndicatorSpec {
            key: "currency",
            label: "Currency vs USD",
            unit: "per USD",
            preferred_frequency: Monthly,
            max_age_years: Some(1),
            candidates: vec![
                C::new(IMF, IFS, "M.{iso2}.ENDE_XDC_USD_RATE", Monthly),
                C::new(IMF, IFS, "M.{iso2}.ENDA_XDC_USD_RATE", Monthly),
                C::new(WORLD_BANK, WDI, "PA.NUS.FCRF", Annual),
            ],
        },
        IndicatorSpec {
            key: "inflation_yoy",
            label: "Inflation Rate (CPI YoY)",
            unit: "percent",
            preferred_frequency: Monthly,
            max_age_years: Some(1),
            candidates: vec![
                C::new(IMF, IFS, "M.{iso2}.PCPI_IX", Monthly).with_transform(Yoy),
                C::new(EUROSTAT, "prc_hicp_midx", "CP00", Monthly).with_transform(Yoy),
                C::new(OECD, "PRICES_CPI", "CPALTT01", Monthly).with_transform(Yoy),
                C::new(WORLD_BANK, WDI, "FP.CPI.TOTL.ZG", Annual),
            ],
        },
        IndicatorSpec {
            key: "inflation_mom",
            label: "Inflation Rate (CPI MoM)",
            unit: "percent",
            preferred_frequency: Monthly,
            max_age_years: Some(1),
            candidates: vec![
                C::new(IMF, IFS, "M.{iso2}.PCPI_IX", Monthly).with_transform(Mom),
                C::new(EUROSTAT, "prc_hicp_midx", "CP00", Monthly).with_transform(Mom),
                C::new(OECD, "PRICES_CPI", "CPALTT01", Monthly).with_transform(Mom),
            ],
        },
        IndicatorSpec {
            key: "policy_rate",
            label: "Policy Interest Rate",
            unit: "percent",
            preferred_frequency: Monthly,
            max_age_years: Some(1),
            candidates: vec![
                // Euro area members only; the adapter declares the coverage.
                C::new(ECB, "FM", "M.U2.EUR.4F.KR.MRR_FR.LEV", Monthly),
                C::new(ECB, "FM", "D.U2.EUR.4F.KR.MRR_FR.LEV", Monthly),
                C::new(IMF, IFS, "M.{iso2}.FPOLM_PA", Monthly),
                C::new(DBNOMICS, "BIS/WS_CBPOL", "M.{iso2}", Monthly),
            ],
        },
        IndicatorSpec {
            key: "reserves_usd",
            label: "Foreign Exchange Reserves",
            unit: "USD",
            preferred_frequency: Monthly,
            max_age_years: Some(1),
            candidates: vec![
                C::new(IMF, IFS, "M.{iso2}.RAXG_USD", Monthly),
                C::new(WORLD_BANK, WDI, "FI.RES.TOTL.CD", Annual),
            ],
        },
        // ====================================================================
        // Activity and labour
        // ====================================================================
        IndicatorSpec {
            key: "gdp_growth_quarterly",
            label: "GDP Growth Rate (Quarterly)",
            unit: "percent",
            preferred_frequency: Quarterly,
            max_age_years: Some(2),
            candidates: vec![
                C::new(IMF, IFS, "Q.{iso2}.NGDP_R_SA_XDC", Quarterly).with_transform(Qoq),
                C::new(EUROSTAT, "namq_10_gdp", "B1GQ", Quarterly).with_transform(Qoq),
                C::new(GMD, "GMD", "rGDP_growth", Annual),
            ],
        },
        IndicatorSpec {
            key: "gdp_growth_annual",
            label: "GDP Annual Growth Rate",
            unit: "percent",
            preferred_frequency: Annual,
            max_age_years: Some(3),
            candidates: vec![
                C::new(GMD, "GMD", "rGDP_growth", Annual),
                C::new(IMF, WEO, "{iso3}.NGDP_RPCH.pcent_change", Annual),
                C::new(WORLD_BANK, WDI, "NY.GDP.MKTP.KD", Annual).with_transform(Yoy),
            ],
        },
        IndicatorSpec {
            key: "unemployment_rate",
            label: "Unemployment Rate",
            unit: "percent",
            preferred_frequency: Monthly,
            max_age_years: Some(2),
            candidates: vec![
                C::new(EUROSTAT, "une_rt_m", "UNEMP_RATE", Monthly),
                C::new(IMF, IFS, "M.{iso2}.LUR_PT", Monthly),
                C::new(OECD, "LFS", "LRHUTTTT", Monthly),
                C::new(WORLD_BANK, WDI, "SL.UEM.TOTL.ZS", Annual),
            ],
        },
        // ====================================================================
        // External sector
        // ====================================================================
        IndicatorSpec {
            key: "trade_balance",
            label: "Balance of Trade",
            unit: "local_currency",
            preferred_frequency: Monthly,
            max_age_years: Some(3),
            candidates: vec![
                C::new(IMF, "DOT", "M.{iso2}.TBG_USD.W00", Monthly),
                C::new(EUROSTAT, "ext_st_eu27_2020sitc", "TRADE_BALANCE", Monthly),
                C::new(WORLD_BANK, WDI, "NE.RSB.GNFS.CN", Annual),
            ],
        },
        IndicatorSpec {
            key: "current_account",
            label: "Current Account Balance",
            unit: "USD",
            preferred_frequency: Quarterly,
            max_age_years: Some(3),
            candidates: vec![
                C::new(IMF, "BOP", "Q.{iso2}.BCA_BP6_USD", Quarterly),
                C::new(WORLD_BANK, WDI, "BN.CAB.XOKA.CD", Annual),
                C::new(GMD, "GMD", "CA", Annual),
            ],
        },
        IndicatorSpec {
            key: "current_account_pct_gdp",
            label: "Current Account to GDP",
            unit: "percent_of_gdp",
            preferred_frequency: Annual,
            max_age_years: Some(5),
            candidates: vec![
                C::new(WORLD_BANK, WDI, "BN.CAB.XOKA.GD.ZS", Annual),
                C::new(GMD, "GMD", "CA_GDP", Annual),
                C::new(
                    IMF,
                    WEO,
                    "{iso3}.BCA.us_dollars/{iso3}.NGDPD.us_dollars",
                    Annual,
                )
                .with_transform(Ratio),
            ],
        },
        // ====================================================================
        // Public finances and governance
        // ====================================================================
        IndicatorSpec {
            key: "gov_debt_pct_gdp",
            label: "Government Debt to GDP",
            unit: "percent_of_gdp",
            preferred_frequency: Annual,
            max_age_years: Some(5),
            candidates: vec![
                C::new(GMD, "GMD", "govdebt_GDP", Annual),
                C::new(IMF, WEO, "{iso3}.GGXWDG_NGDP.pcent_gdp", Annual),
                C::new(EUROSTAT, "gov_10dd_edpt1", "GG_DEBT_PCT_GDP", Annual),
                C::new(WORLD_BANK, WDI, "GC.DOD.TOTL.GD.ZS", Annual),
            ],
        },
        IndicatorSpec {
            key: "gov_budget_pct_gdp",
            label: "Government Budget Balance",
            unit: "percent_of_gdp",
            preferred_frequency: Annual,
            max_age_years: Some(5),
            candidates: vec![
                C::new(GMD, "GMD", "govdef_GDP", Annual),
                C::new(IMF, WEO, "{iso3}.GGXCNL_NGDP.pcent_gdp", Annual),
                C::new(EUROSTAT, "gov_10dd_edpt1", "NET_LEND_BORR_PCT_GDP", Annual),
                C::new(WORLD_BANK, WDI, "GC.NLD.TOTL.GD.ZS", Annual),
                C::new(WORLD_BANK, WDI, "GC.BAL.CASH.GD.ZS", Annual),
            ],
        },
        IndicatorSpec {
            key: "government_effectiveness",
            label: "Government Effectiveness",
            unit: "index",
            preferred_frequency: Annual,
            max_age_years: Some(3),
            candidates: vec![C::new(WORLD_BANK, "WGI", "GE.EST", Annual)],
        },
    ]
}
