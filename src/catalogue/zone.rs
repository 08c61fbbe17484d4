//! Urban planning decisions (`urf:`)
//!
//! Every zone type shares one flat record layout. Type-specific properties
//! are simply absent on zones that do not carry them; facility detail blocks
//! (park, sewer, road, ...) are read from their attribute sub-elements.
//! `function` and `usage` codes are resolved through the table of the zone
//! type that carries them.

use crate::model::{AttributeGroup, AttributeRule, Datatype, FeatureRule, GeometryRules, LodRule};

const ZONE_TYPES: &[&str] = &[
    "urf:AircraftNoiseControlZone",
    "urf:AreaClassification",
    "urf:CollectiveFacilitiesForReconstruction",
    "urf:CollectiveFacilitiesForReconstructionAndRevitalization",
    "urf:CollectiveFacilitiesForTsunamiDisasterPrevention",
    "urf:CollectiveGovernmentAndPublicOfficeFacilities",
    "urf:CollectiveHousingFacilities",
    "urf:CollectiveUrbanDisasterPreventionFacilities",
    "urf:ConservationZoneForClustersOfTraditionalStructures",
    "urf:DisasterPreventionBlockImprovementProject",
    "urf:DisasterPreventionBlockImprovementZonePlan",
    "urf:DistributionBusinessPark",
    "urf:DistributionBusinessZone",
    "urf:DistrictDevelopmentPlan",
    "urf:DistrictFacility",
    "urf:DistrictImprovementPlanForDisasterPreventionBlockImprovementZonePlan",
    "urf:DistrictImprovementPlanForHistoricSceneryMaintenanceAndImprovementDistrict",
    "urf:DistrictPlan",
    "urf:DistrictsAndZones",
    "urf:EducationalAndCulturalFacility",
    "urf:ExceptionalFloorAreaRateDistrict",
    "urf:FirePreventionDistrict",
    "urf:FireProtectionFacility",
    "urf:FloodPreventionFacility",
    "urf:GlobalHubCityDevelopmentProject",
    "urf:GreenSpaceConservationDistrict",
    "urf:HeightControlDistrict",
    "urf:HighLevelUseDistrict",
    "urf:HighRiseResidentialAttractionDistrict",
    "urf:HistoricSceneryMaintenanceAndImprovementDistrictPlan",
    "urf:HousingControlArea",
    "urf:IndustrialParkDevelopmentProject",
    "urf:LandReadjustmentProject",
    "urf:LandReadjustmentPromotionArea",
    "urf:LandReadjustmentPromotionAreasForCoreBusinessUrbanDevelopment",
    "urf:LandscapeZone",
    "urf:MarketsSlaughterhousesCrematoria",
    "urf:MedicalFacility",
    "urf:NewHousingAndUrbanDevelopmentProject",
    "urf:NewUrbanInfrastructureProject",
    "urf:OpenSpaceForPublicUse",
    "urf:ParkingPlaceDevelopmentZone",
    "urf:PortZone",
    "urf:PrivateUrbanRenewalProjectPlan",
    "urf:ProductiveGreenZone",
    "urf:ProjectPromotionArea",
    "urf:PromotionDistrict",
    "urf:QuasiUrbanPlanningArea",
    "urf:ResidenceAttractionArea",
    "urf:ResidentialBlockConstructionProject",
    "urf:ResidentialBlockConstructionPromotionArea",
    "urf:ResidentialEnvironmentImprovementDistrict",
    "urf:RoadsideDistrictFacility",
    "urf:RoadsideDistrictImprovementPlan",
    "urf:RoadsideDistrictPlan",
    "urf:RuralDistrictFacility",
    "urf:RuralDistrictImprovementPlan",
    "urf:RuralDistrictPlan",
    "urf:SandControlFacility",
    "urf:ScenicDistrict",
    "urf:ScheduledAreaForCollectiveGovernmentAndPublicOfficeFacilities",
    "urf:ScheduledAreaForCollectiveHousingFacilities",
    "urf:ScheduledAreaForDistributionBusinessPark",
    "urf:ScheduledAreaForIndustrialParkDevelopmentProjects",
    "urf:ScheduledAreaForNewHousingAndUrbanDevelopmentProjects",
    "urf:ScheduledAreaForNewUrbanInfrastructureProjects",
    "urf:ScheduledAreaForUrbanDevelopmentProject",
    "urf:SnowProtectionFacility",
    "urf:SocialWelfareFacility",
    "urf:SpecialGreenSpaceConservationDistrict",
    "urf:SpecialUrbanRenaissanceDistrict",
    "urf:SpecialUseAttractionDistrict",
    "urf:SpecialUseDistrict",
    "urf:SpecialUseRestrictionDistrict",
    "urf:SpecialZoneForPreservationOfHistoricalLandscape",
    "urf:SpecifiedBlock",
    "urf:SpecifiedBuildingZoneImprovementPlan",
    "urf:SpecifiedDisasterPreventionBlockImprovementZone",
    "urf:SpecifiedUrgentUrbanRenewalArea",
    "urf:SupplyFacility",
    "urf:TelecommunicationFacility",
    "urf:TideFacility",
    "urf:TrafficFacility",
    "urf:TreatmentFacility",
    "urf:TreePlantingDistrict",
    "urf:UnclassifiedBlankArea",
    "urf:UnclassifiedUseDistrict",
    "urf:UnusedLandUsePromotionArea",
    "urf:UrbanDevelopmentProject",
    "urf:UrbanDisasterRecoveryPromotionArea",
    "urf:UrbanFacility",
    "urf:UrbanFacilityStipulatedByCabinetOrder",
    "urf:UrbanFunctionAttractionArea",
    "urf:UrbanPlanningArea",
    "urf:UrbanRedevelopmentProject",
    "urf:UrbanRedevelopmentPromotionArea",
    "urf:UrbanRenewalProject",
    "urf:UrgentUrbanRenewalArea",
    "urf:UseDistrict",
    "urf:Waterway",
    "urf:WindProtectionFacility",
    "urf:ZonalDisasterPreventionFacility",
    "urf:Zone",
    "urf:ZoneForPreservationOfHistoricalLandscape",
];

const FUNCTION_TABLES: &[(&str, &str)] = &[
    ("urf:UrbanPlanningArea", "Common_urbanPlanType"),
    ("urf:QuasiUrbanPlanningArea", "Common_urbanPlanType"),
    ("urf:AreaClassification", "Common_areaClassificationType"),
    ("urf:PromotionDistrict", "PromotionArea_function"),
    ("urf:DistrictFacility", "Common_districtFacilityType"),
    ("urf:RoadsideDistrictFacility", "Common_districtFacilityType"),
    ("urf:RuralDistrictFacility", "Common_districtFacilityType"),
    ("urf:ZonalDisasterPreventionFacility", "Common_districtFacilityType"),
    ("urf:ProjectPromotionArea", "ProjectPromotionArea_function"),
    ("urf:UrbanRedevelopmentPromotionArea", "ProjectPromotionArea_function"),
    ("urf:LandReadjustmentPromotionArea", "ProjectPromotionArea_function"),
    ("urf:ResidentialBlockConstructionPromotionArea", "ProjectPromotionArea_function"),
    (
        "urf:LandReadjustmentPromotionAreasForCoreBusinessUrbanDevelopment",
        "ProjectPromotionArea_function",
    ),
    ("urf:ScheduledAreaForUrbanDevelopmentProject", "ScheduledAreaForUrbanDevelopment_function"),
    ("urf:ScheduledAreaForIndustrialParkDevelopmentProjects", "ScheduledAreaForUrbanDevelopment_function"),
    ("urf:ScheduledAreaForNewUrbanInfrastructureProjects", "ScheduledAreaForUrbanDevelopment_function"),
    ("urf:ScheduledAreaForCollectiveHousingFacilities", "ScheduledAreaForUrbanDevelopment_function"),
    (
        "urf:ScheduledAreaForCollectiveGovernmentAndPublicOfficeFacilities",
        "ScheduledAreaForUrbanDevelopment_function",
    ),
    ("urf:ScheduledAreaForDistributionBusinessPark", "ScheduledAreaForUrbanDevelopment_function"),
];

const USAGE_TABLES: &[(&str, &str)] = &[
    ("urf:DistrictFacility", "UrbanFacility_function"),
    ("urf:RoadsideDistrictFacility", "UrbanFacility_function"),
    ("urf:RuralDistrictFacility", "UrbanFacility_function"),
    ("urf:ZonalDisasterPreventionFacility", "UrbanFacility_function"),
];

const ZONE: &[AttributeRule] = &[
    AttributeRule::coded_by_tag("function", "./urf:function", Datatype::StringList, FUNCTION_TABLES),
    AttributeRule::coded_by_tag("usage", "./urf:usage", Datatype::StringList, USAGE_TABLES),
    AttributeRule::new("validFrom", "./urf:validFrom", Datatype::Date),
    AttributeRule::coded(
        "validFromType",
        "./urf:validFromType",
        Datatype::String,
        "Common_validType",
    ),
    AttributeRule::new("validTo", "./urf:validTo", Datatype::Date),
    AttributeRule::coded("validToType", "./urf:validToType", Datatype::String, "Common_validType"),
    AttributeRule::new("enactmentFiscalYear", "./urf:enactmentFiscalYear", Datatype::Integer),
    AttributeRule::new("expirationFiscalYear", "./urf:expirationFiscalYear", Datatype::Integer),
    AttributeRule::new("legalGrounds", "./urf:legalGrounds", Datatype::String),
    AttributeRule::new("custodian", "./urf:custodian", Datatype::String),
    AttributeRule::new("notificationNumber", "./urf:notificationNumber", Datatype::String),
    AttributeRule::new("finalNotificationDate", "./urf:finalNotificationDate", Datatype::Date),
    AttributeRule::new(
        "finalNotificationNumber",
        "./urf:finalNotificationNumber",
        Datatype::String,
    ),
    AttributeRule::new("surveyYear", "./urf:surveyYear", Datatype::Integer),
    AttributeRule::new("nominalArea", "./urf:nominalArea", Datatype::Double),
    AttributeRule::coded("prefecture", "./urf:prefecture", Datatype::String, "Common_prefecture"),
    AttributeRule::coded("city", "./urf:city", Datatype::String, "Common_localPublicAuthorities"),
    AttributeRule::new("reference", "./urf:reference", Datatype::String),
    AttributeRule::new("reason", "./urf:reason", Datatype::String),
    AttributeRule::new("note", "./urf:note", Datatype::String),
    AttributeRule::new("location", "./urf:location", Datatype::String),
];

const PLANNING: &[AttributeRule] = &[
    AttributeRule::coded(
        "areaClassificationType",
        "./urf:areaClassificationType",
        Datatype::String,
        "Common_areaClassificationType",
    ),
    AttributeRule::coded(
        "urbanPlanType",
        "./urf:urbanPlanType",
        Datatype::String,
        "Common_urbanPlanType",
    ),
    AttributeRule::new("areaInTotal", "./urf:areaInTotal", Datatype::Double),
    AttributeRule::new("number", "./urf:number", Datatype::String),
];

const ZONE_DETAIL: &[AttributeRule] = &[
    AttributeRule::coded(
        "areaClassification",
        "./urf:areaClassification",
        Datatype::String,
        "Common_availabilityType",
    ),
    AttributeRule::new(
        "activityRestrictionInFarmland",
        "./urf:activityRestrictionInFarmland",
        Datatype::String,
    ),
    AttributeRule::new("buildingCoverageRate", "./urf:buildingCoverageRate", Datatype::Double),
    AttributeRule::new(
        "buildingDesignRestriction",
        "./urf:buildingDesignRestriction",
        Datatype::String,
    ),
    AttributeRule::new("buildingLotDevelopment", "./urf:buildingLotDevelopment", Datatype::String),
    AttributeRule::new("buildingRestrictions", "./urf:buildingRestrictions", Datatype::String),
    AttributeRule::new("buildingUsage", "./urf:buildingUsage", Datatype::String),
    AttributeRule::new("cityPopulation", "./urf:cityPopulation", Datatype::Integer),
    AttributeRule::new("developer", "./urf:developer", Datatype::String),
    AttributeRule::new("developmentPlan", "./urf:developmentPlan", Datatype::String),
    AttributeRule::new("developmentPolicy", "./urf:developmentPolicy", Datatype::String),
    AttributeRule::new(
        "disasterPreventionPublicFacilityAllocation",
        "./urf:disasterPreventionPublicFacilityAllocation",
        Datatype::String,
    ),
    AttributeRule::new(
        "districtFacilitiesAllocation",
        "./urf:districtFacilitiesAllocation",
        Datatype::String,
    ),
    AttributeRule::new("districtsAllocation", "./urf:districtsAllocation", Datatype::String),
    AttributeRule::new(
        "emergencyRecoveryPolicy",
        "./urf:emergencyRecoveryPolicy",
        Datatype::String,
    ),
    AttributeRule::new("endLocation", "./urf:endLocation", Datatype::String),
    AttributeRule::new("expirationDate", "./urf:expirationDate", Datatype::Date),
    AttributeRule::new("facilitiesAllocation", "./urf:facilitiesAllocation", Datatype::String),
    AttributeRule::coded(
        "facilityType",
        "./urf:facilityType",
        Datatype::String,
        "ZonalDisasterPreventionFacility_facilityType",
    ),
    AttributeRule::new("floorAreaRate", "./urf:floorAreaRate", Datatype::Double),
    AttributeRule::new(
        "guidelinePublicationDate",
        "./urf:guidelinePublicationDate",
        Datatype::Date,
    ),
    AttributeRule::new("housing", "./urf:housing", Datatype::String),
    AttributeRule::new("housingTarget", "./urf:housingTarget", Datatype::String),
    AttributeRule::new("implementationBody", "./urf:implementationBody", Datatype::String),
    AttributeRule::new("implementationPeriod", "./urf:implementationPeriod", Datatype::String),
    AttributeRule::new("landUsePlan", "./urf:landUsePlan", Datatype::String),
    AttributeRule::new("landUsePolicy", "./urf:landUsePolicy", Datatype::String),
    AttributeRule::new("landuseRestrictions", "./urf:landuseRestrictions", Datatype::String),
    AttributeRule::new(
        "maximumBuildingCoverageRate",
        "./urf:maximumBuildingCoverageRate",
        Datatype::Double,
    ),
    AttributeRule::new("maximumBuildingHeight", "./urf:maximumBuildingHeight", Datatype::String),
    AttributeRule::new("maximumFloorAreaRate", "./urf:maximumFloorAreaRate", Datatype::Double),
    AttributeRule::new("minimumFloorAreaRate", "./urf:minimumFloorAreaRate", Datatype::Double),
    AttributeRule::new("minimumFrontageRate", "./urf:minimumFrontageRate", Datatype::Double),
    AttributeRule::new("minimumGreeningRate", "./urf:minimumGreeningRate", Datatype::Double),
    AttributeRule::new("numberOfHousing", "./urf:numberOfHousing", Datatype::Integer),
    AttributeRule::new("objectives", "./urf:objectives", Datatype::String),
    AttributeRule::new("otherRestrictions", "./urf:otherRestrictions", Datatype::String),
    AttributeRule::new("plan", "./urf:plan", Datatype::String),
    AttributeRule::coded(
        "plannedProjectType",
        "./urf:plannedProjectType",
        Datatype::String,
        "UrbanDevelopmentProject_function",
    ),
    AttributeRule::new("policy", "./urf:policy", Datatype::String),
    AttributeRule::new(
        "policyForAreaClassification",
        "./urf:policyForAreaClassification",
        Datatype::String,
    ),
    AttributeRule::new(
        "policyForUrbanPlanDecision",
        "./urf:policyForUrbanPlanDecision",
        Datatype::String,
    ),
    AttributeRule::new("population", "./urf:population", Datatype::Integer),
    AttributeRule::new("publicFacilities", "./urf:publicFacilities", Datatype::String),
    AttributeRule::new("publicFacilitiesPlans", "./urf:publicFacilitiesPlans", Datatype::String),
    AttributeRule::new("purposeForUrbanPlan", "./urf:purposeForUrbanPlan", Datatype::String),
    AttributeRule::new(
        "reasonForAreaClassification",
        "./urf:reasonForAreaClassification",
        Datatype::String,
    ),
    AttributeRule::coded(
        "requirement",
        "./urf:requirement",
        Datatype::String,
        "SpecialGreenSpaceConservationDistrict_requirement",
    ),
    AttributeRule::new("scheduledExecutor", "./urf:scheduledExecutor", Datatype::String),
    AttributeRule::new("setbackRestrictions", "./urf:setbackRestrictions", Datatype::String),
    AttributeRule::new("shadeRegulation", "./urf:shadeRegulation", Datatype::String),
    AttributeRule::coded(
        "specification",
        "./urf:specification",
        Datatype::String,
        "Common_availabilityType",
    ),
    AttributeRule::new("startLocation", "./urf:startLocation", Datatype::String),
    AttributeRule::new("storeysAboveGround", "./urf:storeysAboveGround", Datatype::Integer),
    AttributeRule::new("storeysBelowGround", "./urf:storeysBelowGround", Datatype::Integer),
    AttributeRule::coded("structure", "./urf:structure", Datatype::String, "Waterway_structure"),
    AttributeRule::new("totalNumberOfHousing", "./urf:totalNumberOfHousing", Datatype::Integer),
    AttributeRule::new("unitArea", "./urf:unitArea", Datatype::String),
    AttributeRule::new("useToBeInduced", "./urf:useToBeInduced", Datatype::String),
    AttributeRule::new("utilityFacilities", "./urf:utilityFacilities", Datatype::String),
    AttributeRule::new("viaLocations", "./urf:viaLocations", Datatype::String),
    AttributeRule::new("wallSetbackDistance", "./urf:wallSetbackDistance", Datatype::String),
    AttributeRule::new("zoneNumber", "./urf:zoneNumber", Datatype::String),
];

const PARK: &[AttributeRule] = &[
    AttributeRule::coded(
        "parkTypeNumber",
        "./urf:parkTypeNumber",
        Datatype::String,
        "ParkAttribute_parkTypeNumber",
    ),
    AttributeRule::coded(
        "parkSizeNumber",
        "./urf:parkSizeNumber",
        Datatype::String,
        "ParkAttribute_parkSizeNumber",
    ),
    AttributeRule::new("parkSerialNumber", "./urf:parkSerialNumber", Datatype::String),
];

const PARKING_PLACE: &[AttributeRule] = &[
    AttributeRule::new("storeysAboveGround", "./urf:storeysAboveGround", Datatype::Integer),
    AttributeRule::new("storeysBelowGround", "./urf:storeysBelowGround", Datatype::Integer),
];

const SEWER_SYSTEM: &[AttributeRule] = &[
    AttributeRule::new("startLocation", "./urf:startLocation", Datatype::String),
    AttributeRule::new("endLocation", "./urf:endLocation", Datatype::String),
    AttributeRule::coded(
        "systemType",
        "./urf:systemType",
        Datatype::String,
        "SewerSystemAttribute_systemType",
    ),
    AttributeRule::new("drainageArea", "./urf:drainageArea", Datatype::String),
];

const RAPID_TRANSIT_RAILROAD: &[AttributeRule] = &[
    AttributeRule::coded(
        "structureType",
        "./urf:structureType",
        Datatype::String,
        "TrafficFacility_trafficFacilityStructureType",
    ),
    AttributeRule::coded(
        "crossType",
        "./urf:crossType",
        Datatype::String,
        "TrafficFacility_trafficFacilityCrossingType",
    ),
];

const URBAN_ROAD: &[AttributeRule] = &[
    AttributeRule::coded(
        "routeTypeNumber",
        "./urf:routeTypeNumber",
        Datatype::String,
        "UrbanRoadAttribute_routeTypeNumber",
    ),
    AttributeRule::coded(
        "routeSizeNumber",
        "./urf:routeSizeNumber",
        Datatype::String,
        "UrbanRoadAttribute_routeSizeNumber",
    ),
    AttributeRule::new("routeSerialNumber", "./urf:routeSerialNumber", Datatype::String),
    AttributeRule::coded(
        "roadType",
        "./urf:roadType",
        Datatype::String,
        "UrbanRoadAttribute_roadType",
    ),
    AttributeRule::new("numberOfLanes", "./urf:numberOfLanes", Datatype::Integer),
    AttributeRule::new("roadStructure", "./urf:roadStructure", Datatype::String),
    AttributeRule::coded(
        "structureType",
        "./urf:structureType",
        Datatype::String,
        "TrafficFacility_trafficFacilityStructureType",
    ),
    AttributeRule::coded(
        "crossType",
        "./urf:crossType",
        Datatype::String,
        "TrafficFacility_trafficFacilityCrossingType",
    ),
    AttributeRule::coded(
        "trafficPlazas",
        "./urf:trafficPlazas",
        Datatype::String,
        "Common_availabilityType",
    ),
];

const VEHICLE_TERMINAL: &[AttributeRule] = &[
    AttributeRule::coded(
        "terminalType",
        "./urf:terminalType",
        Datatype::String,
        "VehicleTerminalAttribute_terminalType",
    ),
];

const WATER_WORKS: &[AttributeRule] = &[
    AttributeRule::new("startLocation", "./urf:startLocation", Datatype::String),
    AttributeRule::new("endLocation", "./urf:endLocation", Datatype::String),
];

pub const RULES: &[FeatureRule] = &[FeatureRule {
    id: "urf:Zone",
    name: "Zone",
    target_elements: ZONE_TYPES,
    attribute_groups: &[
        AttributeGroup::direct(ZONE),
        AttributeGroup::direct(PLANNING),
        AttributeGroup::direct(ZONE_DETAIL),
        AttributeGroup::at("./urf:parkAttribute/urf:ParkAttribute", PARK),
        AttributeGroup::at("./urf:parkingPlaceAttribute/urf:ParkingPlaceAttribute", PARKING_PLACE),
        AttributeGroup::at("./urf:sewerSystemsAttribute/urf:SewerSystemAttribute", SEWER_SYSTEM),
        AttributeGroup::at(
            "./urf:urbanRapidTransitRailroadAttribute/urf:UrbanRapidTransitRailroadAttribute",
            RAPID_TRANSIT_RAILROAD,
        ),
        AttributeGroup::at("./urf:urbanRoadAttribute/urf:UrbanRoadAttribute", URBAN_ROAD),
        AttributeGroup::at("./urf:vehicleTerminalAttribute/urf:VehicleTerminalAttribute", VEHICLE_TERMINAL),
        AttributeGroup::at("./urf:waterWorksAttribute/urf:WaterWorksAttribute", WATER_WORKS),
    ],
    geometries: GeometryRules::per_lod([
        Some(LodRule::new(&["./urf:lod0MultiSurface"], &["./urf:lod0MultiSurface//gml:Polygon"]).is2d()),
        Some(LodRule::new(&["./urf:lod1MultiSurface"], &["./urf:lod1MultiSurface//gml:Polygon"]).is2d()),
        None,
        None,
        None,
    ]),
    ..FeatureRule::DEFAULT
}];
