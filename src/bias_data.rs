//! Default bias correction curve for `P = 14`.
//!
//! Produced by `cargo run --release --example generate_biases` with the default
//! `GenerationOptions` (`max_cardinality = 7 * M`, `repeats = 5000`, `initial_step = 50`,
//! `step_rate = 1.25`), one entry per interpolation point.
//!
//! Each entry is `(raw estimate, bias)`: the averaged raw harmonic estimate measured at the
//! interpolation point and the averaged `true cardinality / raw estimate` multiplier.

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const DEFAULT_BIASES: [(u64, f64); 1037] = [
    (108, 0.465021441249475), (216, 0.464262932405401), (323, 0.4642188043264502),
    (431, 0.4645756015839825), (538, 0.4649807483632617), (645, 0.46532911524607834),
    (751, 0.46588932122512405), (858, 0.4663783572467206), (964, 0.4668821438109072),
    (1070, 0.46733738657289503), (1176, 0.46789488729583945), (1281, 0.4683582583990369),
    (1387, 0.468716600011662), (1492, 0.46918053407899035), (1597, 0.4697173555289364),
    (1701, 0.4702535795930438), (1806, 0.4707479797103248), (1910, 0.47124296194333),
    (2014, 0.47174153972099386), (2118, 0.47222703520088416), (2222, 0.47267566774377867),
    (2325, 0.4731688685238847), (2428, 0.47369209426330183), (2531, 0.47422241603638743),
    (2633, 0.474714789025363), (2736, 0.4752330416650785), (2838, 0.4757253237155976),
    (2940, 0.4762474496551334), (3042, 0.4767282215132372), (3144, 0.4771728924655175),
    (3245, 0.47769688755731987), (3346, 0.47822880941708273), (3447, 0.4787259113503804),
    (3547, 0.47927142549436075), (3648, 0.47978094072691985), (3748, 0.48030664613560586),
    (3848, 0.48082293705397117), (3947, 0.4813499639400915), (4047, 0.4818365834236375),
    (4147, 0.48234987380768934), (4246, 0.482838956743234), (4345, 0.4833520207623717),
    (4444, 0.48387086460075507), (4542, 0.48437558662500096), (4640, 0.4849154396121434),
    (4738, 0.48542165340371995), (4836, 0.4859329036024943), (4934, 0.48644013352546234),
    (5031, 0.4869555784402253), (5129, 0.48747738229706794), (5226, 0.48797799902405387),
    (5323, 0.4884851821888121), (5419, 0.48899916351851724), (5516, 0.4894726700215542),
    (5613, 0.4899913023286448), (5709, 0.49048978846971525), (5805, 0.49099699409133074),
    (5901, 0.49148558315963703), (5997, 0.49197211720458744), (6092, 0.49247082745710485),
    (6187, 0.4929617957295296), (6282, 0.49346959509398713), (6377, 0.49396517070944873),
    (6472, 0.49447778667743203), (6566, 0.4949667508771094), (6661, 0.49547255559688347),
    (6755, 0.4959687440350954), (6849, 0.4964689023772644), (6942, 0.4969825251042886),
    (7035, 0.4975099039656864), (7129, 0.4980181341173564), (7222, 0.49851915424803217),
    (7315, 0.49901322817864086), (7407, 0.4995250678053197), (7500, 0.500020252124303),
    (7592, 0.5005228343423163), (7684, 0.5010306953588878), (7776, 0.501543754194149),
    (7868, 0.5020417008470692), (7959, 0.5025678435906825), (8051, 0.5030646619287066),
    (8142, 0.5035619740993101), (8233, 0.5040765251987864), (8324, 0.504591549670556),
    (8415, 0.5050758677824004), (8506, 0.5055714640638744), (8596, 0.5060746690041582),
    (8686, 0.5065741481425483), (8776, 0.5070916373541697), (8866, 0.507601488192603),
    (8955, 0.5080959452051284), (9045, 0.5086044897167313), (9134, 0.5091079613862287),
    (9223, 0.5096128393423798), (9312, 0.5101204352537267), (9400, 0.5106372331441017),
    (9489, 0.5111412598162862), (9577, 0.5116435025085573), (9666, 0.5121347583940327),
    (9754, 0.5126269819681274), (9842, 0.5131274523470932), (9930, 0.5136300391290304),
    (10017, 0.514126824184816), (10105, 0.5146348262226212), (10192, 0.5151334990182964),
    (10279, 0.515640662977868), (10365, 0.5161562595427261), (10452, 0.5166630258578551),
    (10539, 0.5171657394987398), (10625, 0.5176710088328583), (10711, 0.5181706265631814),
    (10797, 0.5186795541676754), (10883, 0.5191707216247043), (10969, 0.5196772144629375),
    (11054, 0.5201852604865755), (11139, 0.5206884055914686), (11225, 0.521195884739221),
    (11309, 0.5217045741129768), (11394, 0.522208371506349), (11479, 0.522712155601821),
    (11563, 0.52321744208936), (11648, 0.5237220020721088), (11732, 0.5242340232364306),
    (11816, 0.5247468914642337), (11900, 0.5252446177653213), (11983, 0.5257430580987982),
    (12067, 0.5262511208757555), (12150, 0.5267554450137671), (12233, 0.5272641823888671),
    (12316, 0.5277710299182315), (12399, 0.528281312554314), (12482, 0.5287774375055235),
    (12565, 0.5292817258872872), (12647, 0.5297780545832173), (12729, 0.5302827294839182),
    (12812, 0.5307843734980492), (12894, 0.5312795309372297), (12975, 0.5317896786482228),
    (13057, 0.5322890922805816), (13138, 0.5328080863609282), (13220, 0.5333112034341916),
    (13301, 0.5338127960438426), (13382, 0.5343195200904345), (13463, 0.5348335627405775),
    (13543, 0.5353399358651175), (13624, 0.5358485399835564), (13704, 0.5363516394411976),
    (13784, 0.5368580720418273), (13865, 0.537356741953694), (13945, 0.5378585828586284),
    (14024, 0.5383620656764166), (14104, 0.5388651023900987), (14183, 0.5393843899242906),
    (14263, 0.5398819267355303), (14342, 0.5403879484843984), (14421, 0.5408850379133414),
    (14500, 0.5413917120009778), (14579, 0.5418883852373888), (14657, 0.5423994772824037),
    (14736, 0.5429065710516959), (14815, 0.543399094734654), (14893, 0.5438967583864435),
    (14971, 0.5444000877605992), (15049, 0.5448983282713175), (15127, 0.545404269890805),
    (15204, 0.5459174695173798), (15282, 0.5464130628760706), (15359, 0.5469189050789489),
    (15437, 0.5474166717738095), (15514, 0.5479166355882591), (15591, 0.5484060363852898),
    (15668, 0.5489121794413161), (15745, 0.5494038061070597), (15821, 0.5499066953199218),
    (15898, 0.5504069338498151), (15974, 0.5509050717658144), (16050, 0.5514018380242671),
    (16126, 0.5519018216448021), (16202, 0.5524028476742658), (16278, 0.5529095069274833),
    (16354, 0.5534053733116082), (16429, 0.55389781323038), (16505, 0.5543998911625012),
    (16580, 0.5549000892744158), (16655, 0.5553997224318196), (16730, 0.5558982507680884),
    (16805, 0.5563867150789926), (16880, 0.5568797660485763), (16955, 0.5573818717468605),
    (17029, 0.5578832019501662), (17104, 0.5583705332651964), (17178, 0.5588638035071574),
    (17252, 0.5593672581964639), (17326, 0.5598616867109913), (17400, 0.5603676677017762),
    (17473, 0.5608637636780369), (17547, 0.561364835427307), (17620, 0.5618608484688727),
    (17694, 0.5623607119055533), (17767, 0.5628612745359909), (17840, 0.5633543433229619),
    (17913, 0.5638521708567656), (17986, 0.5643469947638293), (18059, 0.5648440955006043),
    (18131, 0.5653415194633588), (18203, 0.5658506293831987), (18276, 0.5663416322999814),
    (18348, 0.5668374072744791), (18420, 0.5673301665923719), (18492, 0.5678182227421412),
    (18564, 0.5683099708397761), (18636, 0.5688050125661002), (18708, 0.5692991594379381),
    (18779, 0.5697980676504535), (18850, 0.5702974235282121), (18922, 0.5707790017019806),
    (18993, 0.5712777286485726), (19064, 0.5717743481032804), (19135, 0.5722717785878637),
    (19205, 0.5727743258057397), (19276, 0.5732647385486499), (19346, 0.5737692043680435),
    (19417, 0.5742575856815622), (19487, 0.5747533611351366), (19557, 0.5752538474409193),
    (19628, 0.5757372329032134), (19697, 0.5762321588561906), (19767, 0.5767316346626638),
    (19837, 0.5772249633978035), (19907, 0.5777139293963435), (19993, 0.5783183512095426),
    (20079, 0.5789385131765087), (20164, 0.5795540353324717), (20250, 0.5801678434237048),
    (20335, 0.5807808227598144), (20420, 0.5814015024821276), (20505, 0.5820236181996516),
    (20590, 0.5826386641368163), (20674, 0.5832481205192065), (20759, 0.5838531989177073),
    (20844, 0.5844593223161086), (20928, 0.5850731255378774), (21012, 0.5856937059405976),
    (21095, 0.586309137331968), (21179, 0.5869203441346764), (21262, 0.5875352769333289),
    (21346, 0.5881371528923485), (21429, 0.5887508720148604), (21512, 0.5893615518242656),
    (21595, 0.5899667985069251), (21678, 0.5905681355767824), (21760, 0.5911790207194183),
    (21843, 0.5917855276895422), (21925, 0.5923917367518112), (22007, 0.5929964221349274),
    (22089, 0.5936052586007817), (22171, 0.5942083153404517), (22253, 0.5948061089388369),
    (22335, 0.5954136263560227), (22416, 0.5960156297420999), (22497, 0.5966160810540867),
    (22579, 0.5972191914600746), (22659, 0.5978248103751055), (22740, 0.5984256535701845),
    (22821, 0.599023390893163), (22902, 0.5996239870534272), (22982, 0.6002286011175794),
    (23062, 0.6008332896789492), (23142, 0.601438715093139), (23222, 0.60203730556713),
    (23301, 0.6026373955759698), (23381, 0.6032333198015711), (23461, 0.6038326821808067),
    (23540, 0.6044292833076114), (23619, 0.6050248670626357), (23698, 0.6056247404484307),
    (23777, 0.6062267661586005), (23856, 0.6068270335394782), (23934, 0.6074251362370137),
    (24013, 0.6080221192977532), (24091, 0.608626917250286), (24169, 0.6092321220086183),
    (24247, 0.6098275652761751), (24325, 0.6104182209256708), (24403, 0.6110151245332219),
    (24480, 0.6116159860778446), (24558, 0.612209405665401), (24635, 0.6128068497709233),
    (24712, 0.6134030325328382), (24789, 0.6139972464931683), (24866, 0.6145801793511436),
    (24943, 0.6151754775298608), (25019, 0.6157760892169883), (25096, 0.6163706302148728),
    (25172, 0.6169670496937801), (25248, 0.6175617488776125), (25324, 0.6181521656981452),
    (25401, 0.618739807602456), (25476, 0.6193379507210015), (25552, 0.6199353143823839),
    (25627, 0.6205329001003933), (25702, 0.6211253649236171), (25778, 0.6217153964753525),
    (25853, 0.6223112531966495), (25928, 0.6229020571622617), (26002, 0.6234945755743542),
    (26077, 0.6240792034177209), (26152, 0.6246692016532686), (26226, 0.625262209829885),
    (26301, 0.6258507333494889), (26375, 0.6264420198436719), (26449, 0.6270283344173123),
    (26523, 0.6276214376574994), (26597, 0.6282106048086673), (26671, 0.6287976708031481),
    (26744, 0.6293891584581909), (26817, 0.6299794829038279), (26891, 0.6305620943200188),
    (26964, 0.6311408084358535), (27038, 0.6317252376434611), (27111, 0.6323126026444597),
    (27184, 0.6328950250325085), (27257, 0.6334752328030615), (27329, 0.634058371136167),
    (27402, 0.6346358462343069), (27475, 0.6352168492190529), (27547, 0.635800293873177),
    (27619, 0.6363838616437058), (27691, 0.6369626567486766), (27763, 0.6375442549314614),
    (27835, 0.6381263500812844), (27907, 0.6387082171726749), (27979, 0.6392876821749977),
    (28050, 0.6398683263435111), (28121, 0.6404548573345206), (28193, 0.6410343063531555),
    (28263, 0.641619410928405), (28335, 0.6421943338323789), (28406, 0.6427762753003522),
    (28476, 0.6433567746370276), (28547, 0.6439315494093412), (28618, 0.644505988339219),
    (28688, 0.6450850715137527), (28759, 0.6456610234095655), (28829, 0.6462409322433734),
    (28899, 0.6468149615273472), (28969, 0.6473953572598512), (29039, 0.6479654979962748),
    (29109, 0.6485397317375848), (29179, 0.6491091300657247), (29248, 0.6496896243379666),
    (29318, 0.6502609382662637), (29387, 0.6508357859114764), (29457, 0.6514113391068066),
    (29526, 0.6519867983532507), (29595, 0.6525624724874639), (29664, 0.653135303348786),
    (29733, 0.6537101482670266), (29802, 0.6542749652312793), (29870, 0.6548467428227883),
    (29939, 0.6554098152715767), (30008, 0.6559760274602026), (30077, 0.6565376073074334),
    (30145, 0.657103361108563), (30213, 0.6576729643773531), (30282, 0.6582339740620952),
    (30350, 0.6587987498100324), (30418, 0.6593662482971893), (30485, 0.6599355011280873),
    (30553, 0.6605067360338363), (30621, 0.6610693454233636), (30689, 0.6616309938273558),
    (30756, 0.6622000364369509), (30823, 0.6627666368055087), (30890, 0.6633332619635464),
    (30957, 0.6638982377516975), (31024, 0.6644593907735628), (31091, 0.6650244671477527),
    (31158, 0.6655922640867943), (31224, 0.6661609608485041), (31291, 0.6667204144661889),
    (31358, 0.6672764559330278), (31425, 0.6678331246275537), (31491, 0.6683920653024277),
    (31557, 0.6689556352894359), (31624, 0.6695122033525404), (31690, 0.6700747685339794),
    (31756, 0.67063460372738), (31822, 0.6711965236504501), (31887, 0.6717570062506013),
    (31953, 0.6723165125836538), (32019, 0.6728746920299271), (32085, 0.6734230630292076),
    (32150, 0.6739800038638979), (32216, 0.6745262612671716), (32281, 0.6750801170656783),
    (32347, 0.6756319962654797), (32412, 0.6761811802138994), (32477, 0.6767361812700773),
    (32542, 0.6772875355396811), (32607, 0.677843440473856), (32672, 0.6783899235825069),
    (32737, 0.6789389479217333), (32802, 0.6794873974934846), (32867, 0.6800384009243076),
    (32931, 0.6805943994359269), (32995, 0.6811407967328325), (33060, 0.6816915873467518),
    (33124, 0.6822367869447552), (33189, 0.6827771297141175), (33253, 0.6833270219418078),
    (33317, 0.6838679941927693), (33381, 0.6844132438639369), (33445, 0.6849573549408797),
    (33509, 0.685498225028406), (33589, 0.6861726955827938), (33667, 0.6868538108722892),
    (33746, 0.6875276488662648), (33825, 0.6882004732668432), (33904, 0.6888715350718634),
    (33983, 0.6895456383740967), (34061, 0.6902194529023538), (34139, 0.6908930289340985),
    (34217, 0.6915673406940009), (34295, 0.6922346427054563), (34374, 0.6928991032370662),
    (34451, 0.6935733508145117), (34529, 0.6942394058519467), (34607, 0.6949007019664831),
    (34685, 0.6955683070119163), (34762, 0.6962316671104605), (34839, 0.6968993092466481),
    (34916, 0.6975654178367587), (34993, 0.6982322708788145), (35070, 0.6988943732168005),
    (35147, 0.6995556779662514), (35224, 0.7002218240468755), (35301, 0.7008813220283643),
    (35377, 0.7015497390167736), (35453, 0.7022108384829898), (35529, 0.7028716852116815),
    (35606, 0.7035225950007631), (35682, 0.7041783762039363), (35758, 0.7048325065941499),
    (35834, 0.7054843981774854), (35910, 0.706135070048286), (35986, 0.7067876586529609),
    (36062, 0.7074423217836188), (36137, 0.7080949832507647), (36212, 0.7087489131025331),
    (36288, 0.7093984984064347), (36363, 0.7100542348308286), (36438, 0.7106951571511562),
    (36513, 0.711343063492644), (36588, 0.7119965372775471), (36663, 0.7126426691711745),
    (36738, 0.7132830664445206), (36813, 0.713929588248086), (36887, 0.7145766774851627),
    (36962, 0.7152149741963418), (37036, 0.7158532683019727), (37111, 0.7164915404579348),
    (37185, 0.7171306338477828), (37259, 0.7177697795085817), (37333, 0.7184086255494119),
    (37407, 0.719046394343843), (37481, 0.7196873623861972), (37555, 0.7203207686555803),
    (37628, 0.7209614069604607), (37702, 0.721595229210702), (37775, 0.7222332674972076),
    (37849, 0.7228696897146513), (37922, 0.7235048727987232), (37995, 0.7241392664953984),
    (38069, 0.7247600433984001), (38142, 0.7253919137180723), (38214, 0.7260316330699094),
    (38287, 0.72666348813434), (38359, 0.7273007615958447), (38432, 0.7279275612355683),
    (38504, 0.7285557024588788), (38577, 0.7291821435062897), (38650, 0.7298027855813733),
    (38722, 0.7304236191731244), (38795, 0.7310469325358734), (38867, 0.7316587174122224),
    (38939, 0.7322806263467554), (39012, 0.7329000646307908), (39084, 0.7335194388578264),
    (39155, 0.734140624829438), (39227, 0.7347575652681682), (39299, 0.7353782122215813),
    (39371, 0.7359913237978668), (39442, 0.7366084831327558), (39514, 0.7372191221589638),
    (39586, 0.7378338419096371), (39657, 0.7384446746582527), (39728, 0.7390583752425893),
    (39800, 0.7396691790345072), (39871, 0.7402789543572597), (39942, 0.7408909981268117),
    (40013, 0.7415025341604387), (40084, 0.7421153907952164), (40155, 0.7427198706028855),
    (40226, 0.7433235684779316), (40296, 0.7439311364766444), (40367, 0.7445353671418478),
    (40438, 0.7451407492401233), (40508, 0.745741540251505), (40579, 0.7463470017738366),
    (40649, 0.7469513224888132), (40719, 0.7475486270727116), (40790, 0.7481433990148972),
    (40860, 0.7487424855811126), (40930, 0.7493389957325033), (41001, 0.7499332709812178),
    (41071, 0.750524010185814), (41141, 0.7511113804663729), (41211, 0.7517033501662836),
    (41281, 0.7522976633047349), (41351, 0.7528964823151232), (41420, 0.7534892654202355),
    (41490, 0.7540809814960464), (41560, 0.7546650304972571), (41629, 0.7552572188040332),
    (41698, 0.7558477577625882), (41768, 0.756433791598042), (41838, 0.7570166115562199),
    (41907, 0.7576052673908086), (41976, 0.7581917781708483), (42045, 0.758776075846139),
    (42114, 0.7593593770583766), (42183, 0.7599407332923516), (42252, 0.7605230975655455),
    (42321, 0.7611017982191987), (42390, 0.761675567583089), (42459, 0.7622552966269546),
    (42528, 0.7628304194553599), (42597, 0.7634064939158486), (42665, 0.7639878600019012),
    (42734, 0.7645597327482696), (42803, 0.7651309015932699), (42871, 0.7657014027204639),
    (42940, 0.7662717747559246), (43008, 0.7668462861583588), (43077, 0.7674193787543322),
    (43145, 0.767986431077588), (43213, 0.7685524663792583), (43282, 0.7691172584750099),
    (43350, 0.7696817263181359), (43418, 0.7702524827697623), (43486, 0.7708157398374281),
    (43554, 0.771383526272611), (43622, 0.7719392913218954), (43691, 0.7724964735878803),
    (43758, 0.7730628960133642), (43826, 0.7736238922181934), (43894, 0.774183388864361),
    (43962, 0.7747368741789281), (44029, 0.7752962153622537), (44097, 0.7758564141870525),
    (44165, 0.7764077830857631), (44232, 0.7769616270221977), (44300, 0.7775155722066778),
    (44385, 0.7781934963144931), (44469, 0.7788802609417177), (44553, 0.7795654083921543),
    (44637, 0.7802501074052668), (44721, 0.7809315384186433), (44805, 0.781609595700046),
    (44888, 0.7822926556571175), (44972, 0.7829738711361213), (45056, 0.7836466288880426),
    (45139, 0.7843218987880316), (45223, 0.78499168551075), (45306, 0.7856703800866774),
    (45389, 0.7863476572598992), (45473, 0.7870159055961962), (45556, 0.7876858396982792),
    (45639, 0.7883572312241423), (45722, 0.7890202331561231), (45805, 0.7896883123955476),
    (45888, 0.7903575174247328), (45970, 0.7910284862361107), (46053, 0.7916904643308489),
    (46136, 0.7923493265631079), (46219, 0.7930010702362131), (46302, 0.7936568934856293),
    (46385, 0.7943077258097849), (46468, 0.7949597155312678), (46550, 0.7956184675567912),
    (46632, 0.7962742021342654), (46714, 0.7969315982608122), (46796, 0.7975855928535581),
    (46879, 0.7982306024429792), (46961, 0.7988801858877209), (47043, 0.7995216183766322),
    (47125, 0.8001661654483387), (47208, 0.8008019839160779), (47290, 0.8014421635791096),
    (47372, 0.8020786114261674), (47454, 0.8027171497048026), (47536, 0.8033493387199496),
    (47618, 0.8039779582643332), (47700, 0.804611265424327), (47782, 0.8052406350619192),
    (47864, 0.8058681002169961), (47946, 0.8064954127899803), (48027, 0.807129059451086),
    (48109, 0.8077510072307572), (48190, 0.8083794892450291), (48272, 0.809005723114666),
    (48353, 0.8096281029849386), (48434, 0.8102490974111115), (48516, 0.8108667568418904),
    (48598, 0.8114810652365679), (48679, 0.8120886454794697), (48761, 0.8126997458294509),
    (48842, 0.8133154404210097), (48923, 0.813930982589761), (49004, 0.8145420727753336),
    (49086, 0.8151476594024177), (49167, 0.8157536617360767), (49248, 0.816355567262201),
    (49330, 0.8169559861737744), (49411, 0.8175587047083399), (49492, 0.8181555051485124),
    (49572, 0.8187684070324757), (49653, 0.8193676903340958), (49734, 0.819964929809432),
    (49815, 0.8205609510840454), (49896, 0.8211519346649743), (49977, 0.8217361950617895),
    (50058, 0.8223266539721413), (50139, 0.8229159089325625), (50220, 0.8234985496126799),
    (50301, 0.824081308640132), (50382, 0.8246685819938039), (50462, 0.8252519713456111),
    (50543, 0.8258360174980999), (50623, 0.8264223622777462), (50704, 0.826999436398849),
    (50784, 0.8275817124010424), (50864, 0.8281646008817788), (50945, 0.8287406593036116),
    (51025, 0.829323008815514), (51105, 0.8299004402039214), (51185, 0.8304737563296328),
    (51266, 0.8310374703241227), (51347, 0.8315992262926276), (51427, 0.8321673478572739),
    (51508, 0.8327311069876842), (51588, 0.8332974172686886), (51668, 0.8338580453435223),
    (51749, 0.8344124125001876), (51829, 0.834979727389817), (51910, 0.8355334976189445),
    (51990, 0.8360908860957905), (52069, 0.8366551183135802), (52150, 0.8372103918907131),
    (52230, 0.8377633260061526), (52310, 0.8383144322157423), (52390, 0.838865390739608),
    (52470, 0.8394178616252486), (52550, 0.8399711867904179), (52630, 0.8405140032256271),
    (52710, 0.8410570011992049), (52790, 0.8416081110532663), (52869, 0.8421532240832008),
    (52950, 0.8426922330600597), (53029, 0.8432335913364234), (53110, 0.8437650928329699),
    (53190, 0.8442990245993968), (53270, 0.8448270646193349), (53350, 0.8453636849581871),
    (53430, 0.8458949568486878), (53510, 0.8464234532583801), (53590, 0.8469575612681077),
    (53669, 0.8474924896134649), (53749, 0.8480210581211384), (53829, 0.8485440849242921),
    (53909, 0.8490719087865686), (53989, 0.8495896753417185), (54069, 0.8501011238689969),
    (54169, 0.8507483628327355), (54269, 0.8513909612524257), (54369, 0.8520375735934683),
    (54468, 0.8526901678606917), (54567, 0.8533389122965235), (54667, 0.8539792003305267),
    (54766, 0.8546197863217024), (54865, 0.8552610744901514), (54965, 0.8558904944733722),
    (55065, 0.8565234146543375), (55165, 0.8571477899665271), (55264, 0.8577778134087619),
    (55364, 0.8584008571677472), (55464, 0.8590165690243584), (55563, 0.8596373037866936),
    (55663, 0.860256686373088), (55762, 0.8608826427132595), (55861, 0.8614995219006787),
    (55961, 0.8621098118557524), (56060, 0.8627219533209715), (56160, 0.8633277773048438),
    (56259, 0.863939837149893), (56358, 0.8645515929995594), (56458, 0.86515136005777),
    (56557, 0.8657497631777489), (56657, 0.8663387076654983), (56757, 0.8669325011609872),
    (56856, 0.8675280405555522), (56956, 0.868120998124194), (57055, 0.8687082558317843),
    (57155, 0.8693011124080784), (57254, 0.8698886401158265), (57354, 0.8704646876607509),
    (57453, 0.8710436283370685), (57553, 0.8716234468720627), (57653, 0.8721977712940943),
    (57751, 0.8727880856314487), (57850, 0.8733641749601171), (57950, 0.8739343099216081),
    (58049, 0.8745042452280781), (58149, 0.8750783996783106), (58248, 0.8756452351063438),
    (58348, 0.8762018163083232), (58448, 0.8767611430479968), (58547, 0.8773218181425007),
    (58647, 0.8778769245329058), (58746, 0.8784321354606595), (58846, 0.8789842104003451),
    (58945, 0.8795440973899197), (59045, 0.8800892558702912), (59144, 0.8806369510017951),
    (59244, 0.8811828402881867), (59343, 0.8817272062141827), (59443, 0.8822722790429544),
    (59542, 0.8828176319380964), (59642, 0.8833504584496268), (59741, 0.883889799351973),
    (59841, 0.884424843343466), (59941, 0.8849531662959931), (60040, 0.8854821502494963),
    (60140, 0.8860108715264537), (60239, 0.8865409760249173), (60340, 0.8870557452425172),
    (60440, 0.887566695774685), (60541, 0.8880773195491003), (60641, 0.8885923996453412),
    (60740, 0.8891109720181716), (60840, 0.8896253109691328), (60940, 0.8901391312988564),
    (61039, 0.8906495033996471), (61139, 0.8911670163012736), (61238, 0.8916740508883338),
    (61338, 0.892178508681211), (61439, 0.8926752697685816), (61538, 0.8931831476034866),
    (61638, 0.8936806243710808), (61738, 0.8941788874370079), (61838, 0.8946720510882942),
    (61939, 0.8951543204082569), (62039, 0.8956429081763164), (62138, 0.8961411009547701),
    (62238, 0.8966310598499886), (62339, 0.8971141185780523), (62439, 0.8975995464352416),
    (62539, 0.8980806120429128), (62639, 0.8985650452809123), (62740, 0.8990301837866402),
    (62840, 0.8994990659524698), (62941, 0.8999685123861892), (63041, 0.9004366693742745),
    (63142, 0.9009104309995859), (63242, 0.90137875939974), (63343, 0.9018394789841024),
    (63443, 0.9023085398389643), (63543, 0.9027701146484464), (63668, 0.9033557587265446),
    (63794, 0.9039256868573351), (63919, 0.9044982186355435), (64045, 0.9050594452336161),
    (64172, 0.9056189788827198), (64297, 0.9061818765679284), (64423, 0.9067445613355598),
    (64548, 0.9073024658492379), (64674, 0.9078573564426122), (64801, 0.9084025478522108),
    (64926, 0.9089543098474382), (65052, 0.9095035626467246), (65178, 0.9100462632133531),
    (65304, 0.910583714577677), (65431, 0.9111148746440736), (65557, 0.9116445360549668),
    (65683, 0.9121796923095992), (65809, 0.9127158553459552), (65936, 0.913242270837842),
    (66062, 0.9137674963531617), (66188, 0.914286679960567), (66315, 0.9148021003434773),
    (66441, 0.91532455291406), (66568, 0.9158356803158966), (66695, 0.9163433740803106),
    (66821, 0.9168500690586973), (66947, 0.9173642189513839), (67074, 0.9178685486173935),
    (67201, 0.9183636173859124), (67328, 0.9188669889712895), (67455, 0.9193580149456219),
    (67583, 0.9198408265380793), (67709, 0.9203325095502422), (67837, 0.9208115657579093),
    (67964, 0.9212963514766108), (68092, 0.9217776971805877), (68218, 0.9222660847700243),
    (68345, 0.9227472867828248), (68473, 0.9232127086939274), (68601, 0.9236800165481723),
    (68728, 0.9241485069806311), (68856, 0.9246205009850974), (68983, 0.9250872394281081),
    (69111, 0.9255459793128881), (69239, 0.9260032565088259), (69367, 0.926457460232114),
    (69495, 0.9269062235748039), (69623, 0.927357324703055), (69751, 0.9278071320318316),
    (69879, 0.9282525196659756), (70007, 0.9286983376779241), (70135, 0.9291375422728344),
    (70263, 0.9295846311414123), (70391, 0.9300267754812825), (70519, 0.9304672323321783),
    (70647, 0.9309010324187182), (70776, 0.9313287996536818), (70904, 0.9317597572789439),
    (71032, 0.932185787816254), (71161, 0.9326164461248131), (71289, 0.9330454468276188),
    (71417, 0.933462970486476), (71546, 0.9338790947219768), (71675, 0.934298233885815),
    (71803, 0.9347133140631002), (71932, 0.9351240552606028), (72061, 0.9355304048519547),
    (72190, 0.9359374342713715), (72318, 0.936352895495772), (72448, 0.9367477070948819),
    (72577, 0.9371492006058728), (72706, 0.9375490374113102), (72836, 0.9379399091578431),
    (72965, 0.9383322880622127), (73094, 0.9387295388528206), (73223, 0.9391218916534219),
    (73353, 0.9395073613998913), (73514, 0.9399930766422123), (73676, 0.940470534670949),
    (73837, 0.9409441551097858), (73999, 0.9414127303292181), (74160, 0.9418887503260188),
    (74322, 0.9423493475563315), (74484, 0.9428188065999294), (74646, 0.9432813165331198),
    (74808, 0.9437338986482408), (74970, 0.9441823759504853), (75133, 0.9446241944354382),
    (75296, 0.9450668638424772), (75459, 0.9455057980431675), (75621, 0.9459470264616126),
    (75784, 0.9463831843090565), (75947, 0.9468169749602188), (76110, 0.9472409848207554),
    (76272, 0.9476801794482248), (76436, 0.9481029708226361), (76598, 0.9485336266418338),
    (76761, 0.9489605997486388), (76924, 0.9493758382556707), (77088, 0.9497896843273959),
    (77250, 0.9502139493979479), (77414, 0.9506125395207171), (77578, 0.9510200352879444),
    (77741, 0.951423983141663), (77905, 0.9518228754740897), (78070, 0.952215176145785),
    (78234, 0.9526041511831805), (78399, 0.9529857596569403), (78564, 0.9533622730008716),
    (78729, 0.9537432798120457), (78895, 0.9541090938620247), (79059, 0.9544866456578329),
    (79225, 0.9548526337015831), (79391, 0.9552133915897961), (79557, 0.9555675696866467),
    (79723, 0.955927923000854), (79889, 0.9562827065603766), (80056, 0.9566250772627806),
    (80221, 0.9569835813714886), (80387, 0.957335418230962), (80553, 0.9576803131794867),
    (80719, 0.9580353225387951), (80885, 0.9583702606630559), (81052, 0.9587111170745034),
    (81217, 0.9590618967653464), (81383, 0.959405674038138), (81548, 0.9597567281053354),
    (81714, 0.96009912366873), (81880, 0.9604317606456092), (82047, 0.960759285298316),
    (82213, 0.9610921547308442), (82380, 0.9614158384579387), (82548, 0.9617262878857223),
    (82715, 0.9620419499269205), (82882, 0.9623550365499283), (83050, 0.9626639028328509),
    (83218, 0.9629643059668322), (83385, 0.9632822102615859), (83594, 0.9636645219507274),
    (83804, 0.9640341069645089), (84011, 0.9644221797496363), (84220, 0.9647952264203433),
    (84430, 0.9651633603283928), (84639, 0.965534228388204), (84848, 0.9658943733946277),
    (85058, 0.9662586972159559), (85268, 0.966606218652466), (85478, 0.9669617969654588),
    (85687, 0.9673187711979108), (85897, 0.967669380636821), (86107, 0.9680184254298762),
    (86318, 0.9683469062156473), (86528, 0.9686848389228028), (86739, 0.9690200943020114),
    (86949, 0.9693572762492837), (87161, 0.9696765445365668), (87372, 0.9700013174569172),
    (87585, 0.9703046427155254), (87796, 0.9706212754187089), (88008, 0.9709319436223285),
    (88220, 0.9712386075063545), (88432, 0.9715513588459928), (88644, 0.9718470243491807),
    (88857, 0.9721401142654588), (89070, 0.9724358323123448), (89283, 0.9727308086478249),
    (89495, 0.9730245782580267), (89708, 0.97331216362984), (89921, 0.973597797220645),
    (90134, 0.9738831523973619), (90346, 0.9741717700904903), (90561, 0.9744415284463211),
    (90773, 0.9747297977706463), (90986, 0.975011768685656), (91199, 0.9752862726096302),
    (91414, 0.9755380168539379), (91628, 0.9758101350151038), (91842, 0.9760710415834705),
    (92056, 0.9763257384915367), (92270, 0.9765935317117223), (92483, 0.9768574210720808),
    (92698, 0.9771085754571556), (92914, 0.9773448904308932), (93129, 0.9775922541484748),
    (93344, 0.9778378718958667), (93559, 0.9780757558380172), (93775, 0.9783160030976856),
    (93990, 0.9785521156181769), (94260, 0.9788396744364507), (94530, 0.979120912931618),
    (94799, 0.9794088319692088), (95069, 0.979693289773988), (95340, 0.9799624097812565),
    (95609, 0.9802414932048045), (95880, 0.980508415361565), (96151, 0.9807737734804155),
    (96421, 0.9810500366637797), (96690, 0.981327607469878), (96961, 0.9815888729548146),
    (97232, 0.9818386796092365), (97504, 0.9820833217568589), (97776, 0.9823333142560663),
    (98047, 0.9825847102225245), (98317, 0.9828476782013337), (98588, 0.983095195861229),
    (98861, 0.9833284728539878), (99133, 0.9835612031097682), (99406, 0.9837873752640657),
    (99680, 0.9840040905161114), (99954, 0.9842226442243269), (100227, 0.9844456435926148),
    (100499, 0.9846773851259699), (100773, 0.9848861695309672), (101048, 0.9850839380814513),
    (101322, 0.985294860933026), (101597, 0.9854872959604752), (101873, 0.9856807154950309),
    (102147, 0.9858814430464182), (102421, 0.986082519978989), (102696, 0.9862832944006407),
    (102970, 0.9864782928844333), (103245, 0.9866708772911077), (103520, 0.986864362229421),
    (103795, 0.9870524602290548), (104070, 0.9872374939115843), (104346, 0.9874148269537533),
    (104623, 0.9875889068040937), (104966, 0.9878149595225927), (105310, 0.9880399082728826),
    (105656, 0.9882414859899492), (106001, 0.9884489083442272), (106346, 0.988656889213203),
    (106690, 0.9888706305790189), (107035, 0.9890688421943019), (107382, 0.9892588489245818),
    (107729, 0.9894390425619264), (108076, 0.9896222241221405), (108424, 0.9897984370512788),
    (108769, 0.9899896154351365), (109117, 0.9901612917793198), (109465, 0.9903321086319307),
    (109812, 0.9905072228550406), (110161, 0.990665646131384), (110509, 0.9908292243848795),
    (110857, 0.9909960749134173), (111205, 0.9911555686660266), (111552, 0.9913260918377748),
    (111899, 0.9914956442886458), (112248, 0.9916493961746068), (112595, 0.9918158813310965),
    (112943, 0.9919776703144937), (113292, 0.9921286966920435), (113640, 0.9922790279135064),
    (113990, 0.9924212989907469), (114339, 0.9925640783632552), (114690, 0.9926965966069389),
    (115040, 0.9928290454110216), (115392, 0.9929473264254777),
];
